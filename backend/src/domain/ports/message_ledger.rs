//! Driving port for message use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Message, MessageId, NewMessage, UserId};

/// Message Ledger operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageLedger: Send + Sync {
    /// Create a message; an unknown owner yields a conflict.
    async fn create(&self, message: NewMessage) -> Result<Message, Error>;

    /// All messages, unfiltered.
    async fn find_all(&self) -> Result<Vec<Message>, Error>;

    /// Look a message up. Absence is a value, not an error.
    async fn find_one(&self, id: MessageId) -> Result<Option<Message>, Error>;

    /// Physically delete a message.
    async fn remove(&self, id: MessageId) -> Result<Message, Error>;

    /// Messages owned by `user_id`, after confirming the user exists.
    async fn user_messages(&self, user_id: UserId) -> Result<Vec<Message>, Error>;
}
