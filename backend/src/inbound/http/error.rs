//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON responses and status codes.
//! Extractor failures (bad JSON, bad form bodies, non-numeric ids) are
//! funnelled through the same type by the `*_error_handler` functions.

use actix_web::error::{JsonPayloadError, PathError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

fn rejected_body(message: &str, reason: String) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "reason": reason }))
        .into()
}

/// `JsonConfig` hook reporting unreadable JSON bodies as `invalid_request`.
///
/// The parser message goes into `details.reason`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON body");
    rejected_body("invalid JSON body", err.to_string())
}

/// `FormConfig` hook reporting unreadable form bodies as `invalid_request`.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected form body");
    rejected_body("invalid form body", err.to_string())
}

/// `PathConfig` hook: an identifier that does not parse names no user.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "unparseable path segment");
    Error::not_found(format!("no route for {}", req.path())).into()
}

#[cfg(test)]
mod tests;
