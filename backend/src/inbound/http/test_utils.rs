//! Helpers for handler tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{MockMessageLedger, MockUserDirectory};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// State over a fresh in-memory gateway.
pub(crate) fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::from_repositories(Arc::clone(&store), store)
}

/// State over mocked driving ports.
pub(crate) fn mock_state(users: MockUserDirectory, messages: MockMessageLedger) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(messages))
}

/// Application with the trace middleware and every API route.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}

/// Read `field` from an error payload's `details`.
pub(crate) fn detail<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get("details")
        .and_then(|details| details.get(field))
        .and_then(Value::as_str)
}
