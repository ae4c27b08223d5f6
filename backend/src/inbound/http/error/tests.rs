//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("user store error: relation \"users\" does not exist")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"sql": "SELECT"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("user 7 not found"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn response_payload(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, header, payload)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(
    #[from(internal_error_case)] internal_error: Error,
    expected_trace_id: String,
) {
    let (status, header, payload) = response_payload(&internal_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn not_found_keeps_its_message() {
    let error = Error::not_found("user 7 not found");

    let (status, header, payload) = response_payload(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(header.is_none());
    assert_eq!(payload, error);
}

#[rstest]
#[actix_web::test]
async fn path_errors_become_not_found() {
    let req = TestRequest::get().uri("/users/abc").to_http_request();
    let err = path_error_handler(PathError::Deserialize(serde::de::Error::custom("nope")), &req);

    assert_eq!(err.as_response_error().status_code(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn form_errors_become_invalid_request() {
    let req = TestRequest::post().uri("/users/1").to_http_request();
    let err = form_error_handler(UrlencodedError::ContentType, &req);

    assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn json_errors_carry_the_parser_reason_in_details() {
    let req = TestRequest::post().uri("/users").to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload: Error =
        serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");

    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "invalid JSON body");
    let reason = payload
        .details()
        .and_then(|details| details.get("reason"))
        .and_then(|reason| reason.as_str())
        .expect("details carry a reason");
    assert_eq!(reason, JsonPayloadError::ContentType.to_string());
}
