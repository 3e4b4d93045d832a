//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities shared by the HTTP and persistence
//! adapters, plus the services that implement the use-cases. Types document
//! their invariants and serde contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - User, Message: stored aggregates with their value types.
//! - UserDirectoryService, MessageLedgerService: use-case implementations.
//! - ExistenceGate: request-time check that an addressed user is active.
//! - TraceId: per-request correlation identifier.

pub mod error;
pub mod existence_gate;
mod identifier;
pub mod message;
pub mod message_ledger_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;
pub mod user_presence;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::existence_gate::{ExistenceGate, INVALID_ID};
pub use self::identifier::IdentifierError;
pub use self::message::{
    Message, MessageContent, MessageId, MessageValidationError, NewMessage,
};
pub use self::message_ledger_service::MessageLedgerService;
pub use self::trace_id::TraceId;
pub use self::user::{
    EmailAddress, NewUser, User, UserChanges, UserId, UserName, UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;
pub use self::user_presence::{UserPresence, check_user_presence};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use postbox::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("nope"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
