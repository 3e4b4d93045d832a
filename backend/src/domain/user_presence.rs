//! Shared user existence check.
//!
//! Both the request-time Existence Gate and the ledger's per-user listing ask
//! the directory the same question through [`check_user_presence`], so the
//! two call sites cannot drift in how they read the answer.

use crate::domain::ports::UserDirectory;
use crate::domain::{Error, UserId};

/// What the directory knows about an addressed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPresence {
    /// No such user.
    Missing,
    /// Stored but soft-deleted.
    Inactive,
    /// Stored and active.
    Active,
}

/// Look `id` up in `directory` and classify the result.
///
/// Directory failures are returned unchanged so each caller decides how to
/// surface them.
pub async fn check_user_presence<D>(directory: &D, id: UserId) -> Result<UserPresence, Error>
where
    D: UserDirectory + ?Sized,
{
    let presence = match directory.find_one(id).await? {
        None => UserPresence::Missing,
        Some(user) if user.active => UserPresence::Active,
        Some(_) => UserPresence::Inactive,
    };
    Ok(presence)
}

/// Not-found outcome for an addressed user.
pub(crate) fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user with id {id} not found"))
}
