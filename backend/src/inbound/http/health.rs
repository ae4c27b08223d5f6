//! Liveness and readiness probes.
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness flag shared with the probe handlers.
///
/// Starts not ready. `create_server` marks it ready once the listener is
/// bound; migrations and the pool are set up before that in `main`.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Answers whenever the workers are serving requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HealthState::probe_response(true)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> StatusCode {
        let app =
            test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        res.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn not_ready_until_marked() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(
            probe(state.clone(), "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.mark_ready();
        assert_eq!(probe(state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn live_before_ready() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(probe(state.clone(), "/health/live").await, StatusCode::OK);
        assert_eq!(
            probe(state, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
