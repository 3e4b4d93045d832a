//! Driving port for user use-cases.
//!
//! Inbound adapters and the message ledger depend on this trait rather than
//! on the concrete service, so both can be exercised with doubles.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// User Directory operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user; duplicate emails yield a conflict.
    async fn create(&self, user: NewUser) -> Result<User, Error>;

    /// All users including inactive ones.
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    /// Look a user up. Absence is a value, not an error.
    async fn find_one(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Apply a partial update.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Soft delete: clear `active` and return the updated user.
    async fn remove(&self, id: UserId) -> Result<User, Error>;
}
