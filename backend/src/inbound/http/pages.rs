//! HTML pages rendered with maud.
//!
//! The form pages perform no data operation: the edit page loads its
//! record from `GET /users/{id}` in the browser.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, HttpResponseBuilder, get, web};
use maud::{DOCTYPE, Markup, html};

use crate::domain::{User, UserId};
use crate::inbound::http::form_view::{USERS_PATH, UserFormView};

/// Path the form script is served from.
pub const FORM_SCRIPT_PATH: &str = "/assets/user_form.js";

const FORM_SCRIPT: &str = include_str!("../../../assets/user_form.js");

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                script src=(FORM_SCRIPT_PATH) defer {}
            }
            body {
                h1 { (title) }
                (body)
            }
        }
    }
}

/// Wrap `body` in the page layout and finish `builder` as an HTML response.
pub fn html_response(mut builder: HttpResponseBuilder, title: &str, body: Markup) -> HttpResponse {
    builder
        .content_type(ContentType::html())
        .body(layout(title, body).into_string())
}

/// Table of users in identifier order.
pub fn render_user_list(users: &[User]) -> Markup {
    html! {
        p { a href={ (USERS_PATH) "/new" } { "New user" } }
        @if users.is_empty() {
            p class="empty" { "No users yet." }
        } @else {
            table id="users" {
                thead {
                    tr { th { "Name" } th { "Language" } th {} }
                }
                tbody {
                    @for user in users {
                        tr data-id=(user.id().get()) {
                            td { (user.name()) }
                            td { (user.display_language()) }
                            td { a href={ (USERS_PATH) "/" (user.id().get()) "/edit" } { "Edit" } }
                        }
                    }
                }
            }
        }
    }
}

/// Blank form for a new user.
#[get("/users/new")]
pub async fn new_user_page() -> HttpResponse {
    let view = UserFormView::new_user();
    html_response(HttpResponse::Ok(), view.title(), view.render())
}

/// Edit form shell; the script fills it from the record endpoint.
#[get("/users/{id}/edit")]
pub async fn edit_user_page(path: web::Path<UserId>) -> HttpResponse {
    let view = UserFormView::edit_user(path.into_inner());
    html_response(HttpResponse::Ok(), view.title(), view.render())
}

#[get("/assets/user_form.js")]
pub async fn form_script() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/javascript; charset=utf-8"))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(FORM_SCRIPT)
}
