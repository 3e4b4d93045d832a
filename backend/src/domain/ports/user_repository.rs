//! Storage Gateway port for the `users` table.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::StorageError;

/// Persistence contract for users.
///
/// Email uniqueness is enforced here and surfaced as
/// [`StorageError::UniqueViolation`]; callers must not pre-check it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored record with its assigned id.
    async fn create(&self, user: &NewUser) -> Result<User, StorageError>;

    /// Every stored user, active or not.
    async fn list(&self) -> Result<Vec<User>, StorageError>;

    /// Fetch a user by identifier; `None` when absent.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Apply a partial update and return the stored record.
    ///
    /// Missing rows surface as [`StorageError::RecordNotFound`].
    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<User, StorageError>;
}
