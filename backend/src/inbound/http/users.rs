//! User record handlers.
//!
//! ```text
//! GET   /users                 HTML list, or JSON with Accept: application/json
//! GET   /users/{id}            {"name":"Ana","language":"ruby","other_language":""}
//! POST  /users                 {"user":{"name":"Ana","language":"ruby","other_language":""}}
//! PATCH /users/{id}            same body as POST
//! POST  /users/{id}            urlencoded fallback for the edit form
//! ```

use actix_web::http::header;
use actix_web::{Either, HttpRequest, HttpResponse, get, patch, post, put, web};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::SaveOutcome;
use crate::domain::{User, UserFields, UserId, ValidationErrors};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form_view::{USERS_PATH, UserFormView};
use crate::inbound::http::pages::{html_response, render_user_list};
use crate::inbound::http::state::HttpState;

/// Field values as submitted by the form script. Missing keys and `null`
/// values read as empty strings and are then reported by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UserInput {
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "other")]
    pub language: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Cobol")]
    pub other_language: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<UserInput> for UserFields {
    fn from(input: UserInput) -> Self {
        UserFields::new(input.name, input.language, input.other_language)
    }
}

/// Request body for create and update: `{"user": {...}}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    pub user: UserInput,
}

/// Urlencoded body posted by the form when scripting is unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserFormPayload {
    #[serde(rename = "user[name]")]
    pub name: String,
    #[serde(rename = "user[language]")]
    pub language: String,
    #[serde(rename = "user[other_language]")]
    pub other_language: String,
}

impl From<UserFormPayload> for UserFields {
    fn from(form: UserFormPayload) -> Self {
        UserFields::new(form.name, form.language, form.other_language)
    }
}

/// Displayable fields of one user, as fetched by the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserDetails {
    pub name: String,
    pub language: String,
    pub other_language: String,
}

impl From<User> for UserDetails {
    fn from(user: User) -> Self {
        let UserFields {
            name,
            language,
            other_language,
        } = user.into_fields();
        Self {
            name,
            language,
            other_language,
        }
    }
}

/// One row of the JSON list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserSummary {
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    pub name: String,
    pub language: String,
    pub other_language: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        let id = user.id();
        let UserDetails {
            name,
            language,
            other_language,
        } = UserDetails::from(user);
        Self {
            id,
            name,
            language,
            other_language,
        }
    }
}

/// Success body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SavedBody {
    #[schema(example = "OK")]
    pub result: String,
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
}

impl SavedBody {
    fn new(id: UserId) -> Self {
        Self {
            result: "OK".to_owned(),
            id,
        }
    }
}

/// Validation failure body: field name to messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ValidationErrorsBody {
    #[schema(value_type = Object)]
    pub errors: ValidationErrors,
}

fn json_outcome(outcome: SaveOutcome) -> HttpResponse {
    match outcome {
        SaveOutcome::Saved(user) => HttpResponse::Ok().json(SavedBody::new(user.id())),
        SaveOutcome::Rejected(errors) => {
            HttpResponse::UnprocessableEntity().json(ValidationErrorsBody { errors })
        }
    }
}

fn form_outcome(outcome: SaveOutcome, view: UserFormView) -> HttpResponse {
    match outcome {
        SaveOutcome::Saved(_) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, USERS_PATH))
            .finish(),
        SaveOutcome::Rejected(errors) => {
            let title = view.title();
            html_response(
                HttpResponse::UnprocessableEntity(),
                title,
                view.with_errors(errors).render(),
            )
        }
    }
}

fn wants_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

/// List users ordered by identifier.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users as HTML, or JSON when requested", body = [UserSummary]),
        (status = 503, description = "User store unavailable", body = crate::domain::Error),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(req: HttpRequest, state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    if wants_json(&req) {
        let body: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();
        return Ok(HttpResponse::Ok().json(body));
    }
    Ok(html_response(
        HttpResponse::Ok(),
        "Users",
        render_user_list(&users),
    ))
}

/// Fetch the displayable fields of one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User fields", body = UserDetails),
        (status = 404, description = "Unknown user", body = crate::domain::Error)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{id}")]
pub async fn show_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<UserDetails>> {
    let user = state.users.fetch_user(path.into_inner()).await?;
    Ok(web::Json(UserDetails::from(user)))
}

/// Create a user from the JSON payload or the urlencoded fallback form.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "User saved", body = SavedBody),
        (status = 303, description = "Form fallback saved; redirect to the list"),
        (status = 400, description = "Malformed body", body = crate::domain::Error),
        (status = 422, description = "Validation failed", body = ValidationErrorsBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: Either<web::Json<UserPayload>, web::Form<UserFormPayload>>,
) -> ApiResult<HttpResponse> {
    match body {
        Either::Left(json) => {
            let fields = UserFields::from(json.into_inner().user);
            Ok(json_outcome(state.forms.create_user(fields).await?))
        }
        Either::Right(form) => {
            let fields = UserFields::from(form.into_inner());
            let view = UserFormView::new_user().with_values(fields.clone());
            Ok(form_outcome(state.forms.create_user(fields).await?, view))
        }
    }
}

async fn save_update(
    state: &HttpState,
    id: UserId,
    payload: UserPayload,
) -> ApiResult<HttpResponse> {
    let outcome = state
        .forms
        .update_user(id, UserFields::from(payload.user))
        .await?;
    Ok(json_outcome(outcome))
}

/// Update a user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User saved", body = SavedBody),
        (status = 400, description = "Malformed body", body = crate::domain::Error),
        (status = 404, description = "Unknown user", body = crate::domain::Error),
        (status = 422, description = "Validation failed", body = ValidationErrorsBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    save_update(&state, path.into_inner(), payload.into_inner()).await
}

/// Replace a user; same contract as `PATCH`.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User saved", body = SavedBody),
        (status = 400, description = "Malformed body", body = crate::domain::Error),
        (status = 404, description = "Unknown user", body = crate::domain::Error),
        (status = 422, description = "Validation failed", body = ValidationErrorsBody)
    ),
    tags = ["users"],
    operation_id = "replaceUser"
)]
#[put("/users/{id}")]
pub async fn replace_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    save_update(&state, path.into_inner(), payload.into_inner()).await
}

/// Urlencoded update posted by the edit form without scripting.
#[post("/users/{id}")]
pub async fn update_user_form(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    form: web::Form<UserFormPayload>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let fields = UserFields::from(form.into_inner());
    let view = UserFormView::edit_user(id).with_values(fields.clone());
    let outcome = state.forms.update_user(id, fields).await?;
    Ok(form_outcome(outcome, view))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
