//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Conversions into domain
//! aggregates re-validate every field so a corrupted row surfaces as a query
//! error instead of an invalid domain value.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::ports::StorageError;
use crate::domain::{
    EmailAddress, Message, MessageContent, MessageId, User, UserChanges, UserId, UserName,
};

use super::schema::{messages, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable for new users.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub active: bool,
}

/// Partial update for users; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub active: Option<bool>,
}

impl<'a> From<&'a UserChanges> for UserChangeset<'a> {
    fn from(changes: &'a UserChanges) -> Self {
        Self {
            name: changes.name.as_ref().map(AsRef::as_ref),
            email: changes.email.as_ref().map(AsRef::as_ref),
            active: changes.active,
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let row_id = row.id;
        let corrupt = |field: &str, err: &dyn std::fmt::Display| {
            StorageError::query(format!("stored user {row_id} has invalid {field}: {err}"))
        };
        Ok(Self {
            id: UserId::new(row.id).map_err(|err| corrupt("id", &err))?,
            name: UserName::new(row.name).map_err(|err| corrupt("name", &err))?,
            email: EmailAddress::new(row.email).map_err(|err| corrupt("email", &err))?,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Row read from `messages`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MessageRow {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable for new messages.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub(crate) struct NewMessageRow<'a> {
    pub content: &'a str,
    pub user_id: i32,
}

impl TryFrom<MessageRow> for Message {
    type Error = StorageError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let row_id = row.id;
        let corrupt = |field: &str, err: &dyn std::fmt::Display| {
            StorageError::query(format!("stored message {row_id} has invalid {field}: {err}"))
        };
        Ok(Self {
            id: MessageId::new(row.id).map_err(|err| corrupt("id", &err))?,
            content: MessageContent::new(row.content)
                .map_err(|err| corrupt("content", &err))?,
            user_id: UserId::new(row.user_id).map_err(|err| corrupt("user_id", &err))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one.
pub(crate) fn collect_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, StorageError>
where
    T: TryFrom<R, Error = StorageError>,
{
    rows.into_iter().map(T::try_from).collect()
}
