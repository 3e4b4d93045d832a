//! User Directory service.
//!
//! Owns user creation, lookup, update and soft deletion, and classifies every
//! [`StorageError`] into a domain outcome exactly once.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{StorageError, UserDirectory, UserRepository};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

use super::user_presence::user_not_found;

/// Conflict message for duplicate emails.
pub const EMAIL_ALREADY_EXISTS: &str = "Email already exists";

/// User Directory backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    users: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a directory over the given repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn internal_failure(error: &StorageError, operation: &'static str) -> Error {
    error!(%error, operation, "user storage failure");
    Error::internal(format!("user storage failure during {operation}: {error}"))
}

/// Map failures from `create`/`update`. `target` is the addressed id, when any.
fn map_write_error(error: StorageError, operation: &'static str, target: Option<UserId>) -> Error {
    match (error, target) {
        (StorageError::UniqueViolation { constraint }, _) => {
            debug!(%constraint, operation, "duplicate user email rejected");
            Error::conflict(EMAIL_ALREADY_EXISTS)
        }
        (StorageError::RecordNotFound, Some(id)) => user_not_found(id),
        (
            error @ (StorageError::RecordNotFound
            | StorageError::ForeignKeyViolation { .. }
            | StorageError::Connection { .. }
            | StorageError::Query { .. }),
            _,
        ) => internal_failure(&error, operation),
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .users
            .create(&user)
            .await
            .map_err(|err| map_write_error(err, "create", None))?;
        debug!(user_id = %created.id, "user created");
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        self.users
            .list()
            .await
            .map_err(|err| internal_failure(&err, "find_all"))
    }

    async fn find_one(&self, id: UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| internal_failure(&err, "find_one"))
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        self.users
            .update(id, &changes)
            .await
            .map_err(|err| map_write_error(err, "update", Some(id)))
    }

    async fn remove(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .users
            .update(id, &UserChanges::deactivate())
            .await
            .map_err(|err| map_write_error(err, "remove", Some(id)))?;
        debug!(user_id = %id, "user deactivated");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
