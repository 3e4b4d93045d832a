//! Liveness and readiness probes.
//!
//! Readiness flips on once the listener is bound; liveness flips off when the
//! process starts draining so orchestrators stop routing to it.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde_json::json;

/// Probe state shared between the server bootstrap and the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    draining: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            draining: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    /// Not ready, not draining.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the server as able to take traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Mark the server as shutting down. Both probes fail afterwards.
    pub fn mark_draining(&self) {
        self.draining.store(true, Ordering::Release);
    }

    /// Readiness: started and not draining.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire) && self.is_alive()
    }

    /// Liveness: not draining.
    pub fn is_alive(&self) -> bool {
        !self.draining.load(Ordering::Acquire)
    }
}

fn probe_response(ok: bool) -> HttpResponse {
    let (mut builder, status) = if ok {
        (HttpResponse::Ok(), "ok")
    } else {
        (HttpResponse::ServiceUnavailable(), "unavailable")
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "status": status }))
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> StatusCode {
        let app = test::init_service(App::new().app_data(state).service(ready).service(live)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        response.status()
    }

    #[rstest]
    #[case(false, false, StatusCode::SERVICE_UNAVAILABLE, StatusCode::OK)]
    #[case(true, false, StatusCode::OK, StatusCode::OK)]
    #[case(true, true, StatusCode::SERVICE_UNAVAILABLE, StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn probes_follow_lifecycle(
        #[case] started: bool,
        #[case] draining: bool,
        #[case] expected_ready: StatusCode,
        #[case] expected_live: StatusCode,
    ) {
        let state = web::Data::new(HealthState::new());
        if started {
            state.mark_ready();
        }
        if draining {
            state.mark_draining();
        }

        assert_eq!(probe(state.clone(), "/health/ready").await, expected_ready);
        assert_eq!(probe(state, "/health/live").await, expected_live);
    }
}
