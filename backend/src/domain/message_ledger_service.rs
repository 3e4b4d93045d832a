//! Message Ledger service.
//!
//! Messages are physically deleted, unlike users. Per-user listing re-checks
//! the owner through the directory even when the route is already gated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{MessageLedger, MessageRepository, StorageError, UserDirectory};
use crate::domain::{Error, Message, MessageId, NewMessage, UserId};

use super::user_presence::{UserPresence, check_user_presence};

/// Conflict message when a new message references an unknown user.
pub const OWNER_DOES_NOT_EXIST: &str = "user does not exist";
/// Conflict message when listing messages for an unknown user.
pub const USER_DOES_NOT_EXIST: &str = "User does not exist";

/// Message Ledger backed by a [`MessageRepository`] and a [`UserDirectory`].
pub struct MessageLedgerService<M, D: ?Sized> {
    messages: Arc<M>,
    directory: Arc<D>,
}

impl<M, D: ?Sized> MessageLedgerService<M, D> {
    /// Create a ledger over the given repository and directory.
    pub fn new(messages: Arc<M>, directory: Arc<D>) -> Self {
        Self {
            messages,
            directory,
        }
    }
}

impl<M, D: ?Sized> Clone for MessageLedgerService<M, D> {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            directory: Arc::clone(&self.directory),
        }
    }
}

fn internal_failure(error: &StorageError, operation: &'static str) -> Error {
    error!(%error, operation, "message storage failure");
    Error::internal(format!("message storage failure during {operation}: {error}"))
}

/// Not-found outcome for an addressed message.
pub(crate) fn message_not_found(id: MessageId) -> Error {
    Error::not_found(format!("message with id {id} not found"))
}

#[async_trait]
impl<M, D> MessageLedger for MessageLedgerService<M, D>
where
    M: MessageRepository,
    D: UserDirectory + ?Sized,
{
    async fn create(&self, message: NewMessage) -> Result<Message, Error> {
        match self.messages.create(&message).await {
            Ok(created) => {
                debug!(message_id = %created.id, user_id = %created.user_id, "message created");
                Ok(created)
            }
            Err(StorageError::ForeignKeyViolation { constraint }) => {
                debug!(%constraint, user_id = %message.user_id, "message owner missing");
                Err(Error::conflict(OWNER_DOES_NOT_EXIST))
            }
            Err(
                err @ (StorageError::UniqueViolation { .. }
                | StorageError::RecordNotFound
                | StorageError::Connection { .. }
                | StorageError::Query { .. }),
            ) => Err(internal_failure(&err, "create")),
        }
    }

    async fn find_all(&self) -> Result<Vec<Message>, Error> {
        self.messages
            .list()
            .await
            .map_err(|err| internal_failure(&err, "find_all"))
    }

    async fn find_one(&self, id: MessageId) -> Result<Option<Message>, Error> {
        self.messages
            .find_by_id(id)
            .await
            .map_err(|err| internal_failure(&err, "find_one"))
    }

    async fn remove(&self, id: MessageId) -> Result<Message, Error> {
        match self.messages.delete(id).await {
            Ok(removed) => {
                debug!(message_id = %id, "message deleted");
                Ok(removed)
            }
            Err(StorageError::RecordNotFound) => Err(message_not_found(id)),
            Err(
                err @ (StorageError::UniqueViolation { .. }
                | StorageError::ForeignKeyViolation { .. }
                | StorageError::Connection { .. }
                | StorageError::Query { .. }),
            ) => Err(internal_failure(&err, "remove")),
        }
    }

    async fn user_messages(&self, user_id: UserId) -> Result<Vec<Message>, Error> {
        let presence = check_user_presence(self.directory.as_ref(), user_id)
            .await
            .map_err(|err| {
                error!(error = %err, %user_id, "owner lookup failed");
                Error::internal(format!("owner lookup failed: {err}"))
            })?;

        match presence {
            UserPresence::Missing => return Err(Error::conflict(USER_DOES_NOT_EXIST)),
            UserPresence::Active | UserPresence::Inactive => {}
        }

        self.messages
            .list_by_user(user_id)
            .await
            .map_err(|err| internal_failure(&err, "user_messages"))
    }
}

#[cfg(test)]
#[path = "message_ledger_service_tests.rs"]
mod tests;
