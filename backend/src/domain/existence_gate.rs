//! Existence Gate: request-time precondition for user-addressed operations.
//!
//! One evaluation per request moves from pending to either allowed or
//! rejected. The gate keeps no state between requests and does not hand the
//! loaded user downstream; it only returns the validated identifier.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::UserDirectory;
use crate::domain::{Error, UserId};

use super::user_presence::{UserPresence, check_user_presence, user_not_found};

/// Message used when the candidate identifier is not a positive integer.
pub const INVALID_ID: &str = "invalid id";

/// Precondition check shared by every route that addresses one user.
#[derive(Clone)]
pub struct ExistenceGate {
    directory: Arc<dyn UserDirectory>,
}

impl ExistenceGate {
    /// Build a gate that consults `directory`.
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Parse `candidate` and admit it if it names an active user.
    ///
    /// Unparseable input is rejected before the directory is consulted.
    ///
    /// # Errors
    /// `NotFound("invalid id")` for non-positive or non-integer input;
    /// `NotFound("user with id <id> not found")` for missing or inactive users;
    /// directory failures pass through unchanged.
    pub async fn admit(&self, candidate: &str) -> Result<UserId, Error> {
        let id = UserId::parse(candidate).map_err(|err| {
            debug!(candidate, error = %err, "existence gate rejected identifier");
            Error::not_found(INVALID_ID)
        })?;
        self.admit_id(id).await
    }

    /// Admit an already-parsed identifier if it names an active user.
    pub async fn admit_id(&self, id: UserId) -> Result<UserId, Error> {
        match check_user_presence(self.directory.as_ref(), id).await? {
            UserPresence::Active => Ok(id),
            presence @ (UserPresence::Missing | UserPresence::Inactive) => {
                debug!(user_id = %id, ?presence, "existence gate rejected user");
                Err(user_not_found(id))
            }
        }
    }
}
