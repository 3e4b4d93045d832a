//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape and are registered under the
//! domain names.

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request body or a field failed shape validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The addressed resource does not exist or is inactive.
    #[schema(rename = "not_found")]
    NotFound,
    /// A uniqueness or ownership rule was violated.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected failure; details are withheld.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response payload.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "Email already exists")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context for validation failures.
    details: Option<serde_json::Value>,
}

/// Stored user. Soft-deleted users have `active = false`.
#[derive(ToSchema)]
#[schema(as = User)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    #[schema(example = 1, minimum = 1)]
    id: i32,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

/// Stored message.
#[derive(ToSchema)]
#[schema(as = Message)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MessageSchema {
    #[schema(example = 1, minimum = 1)]
    id: i32,
    #[schema(example = "Hello there")]
    content: String,
    #[schema(example = 1, minimum = 1)]
    user_id: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}
