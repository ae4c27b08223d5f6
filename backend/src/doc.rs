//! OpenAPI documentation for the JSON endpoints.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::users::{
    SavedBody, UserDetails, UserInput, UserPayload, UserSummary, ValidationErrorsBody,
};

/// OpenAPI document for the user form service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User form service",
        description = "Create, edit and list users with a conditional free-text language."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::show_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::replace_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        UserInput,
        UserPayload,
        UserDetails,
        UserSummary,
        SavedBody,
        ValidationErrorsBody
    )),
    tags(
        (name = "users", description = "User records and the form endpoints"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
