//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every HTTP endpoint plus the schema wrappers from
//! `inbound::http::schemas`, which keep utoipa out of the domain types. The
//! document is served with Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::messages::CreateMessageRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, MessageSchema, UserSchema};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Postbox API",
        description = "Users and their messages. Users are soft-deleted; routes addressing one user require it to be active.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_user_messages,
        crate::inbound::http::messages::create_message,
        crate::inbound::http::messages::list_messages,
        crate::inbound::http::messages::get_message,
        crate::inbound::http::messages::delete_message,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        MessageSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        CreateMessageRequest,
    )),
    tags(
        (name = "users", description = "User directory"),
        (name = "messages", description = "Message ledger"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("User", &["id", "name", "email", "active", "createdAt", "updatedAt"])]
    #[case("Message", &["id", "content", "userId", "createdAt", "updatedAt"])]
    #[case("Error", &["code", "message", "traceId", "details"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(fields.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }

    #[rstest]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/users/{id}/messages",
            "/api/v1/messages",
            "/api/v1/messages/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
