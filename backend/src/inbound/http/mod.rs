//! HTTP inbound adapter: JSON endpoints, HTML pages and probes.

pub mod error;
pub mod form_view;
pub mod health;
pub mod pages;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the user routes and extractor error handlers.
///
/// `/users/new` is registered before `/users/{id}` so the literal segment
/// wins. Health probes and API docs are mounted separately by the server.
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::FormConfig::default().error_handler(error::form_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(pages::form_script)
        .service(users::list_users)
        .service(users::create_user)
        .service(pages::new_user_page)
        .service(pages::edit_user_page)
        .service(users::show_user)
        .service(users::update_user)
        .service(users::replace_user)
        .service(users::update_user_form);
}
