//! Storage Gateway port for the `messages` table.

use async_trait::async_trait;

use crate::domain::{Message, MessageId, NewMessage, UserId};

use super::StorageError;

/// Persistence contract for messages.
///
/// The owning user is enforced by a foreign key and surfaced as
/// [`StorageError::ForeignKeyViolation`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message and return the stored record.
    async fn create(&self, message: &NewMessage) -> Result<Message, StorageError>;

    /// Every stored message.
    async fn list(&self) -> Result<Vec<Message>, StorageError>;

    /// Messages whose `user_id` equals `user_id`.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Message>, StorageError>;

    /// Fetch a message by identifier; `None` when absent.
    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, StorageError>;

    /// Physically delete a message and return the removed record.
    ///
    /// Missing rows surface as [`StorageError::RecordNotFound`].
    async fn delete(&self, id: MessageId) -> Result<Message, StorageError>;
}
