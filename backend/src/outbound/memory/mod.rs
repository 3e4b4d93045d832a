//! In-process Storage Gateway.
//!
//! Mirrors the PostgreSQL schema's rules: serial identifiers starting at 1,
//! a unique email per user, and a foreign key from messages to users. Used by
//! the server when no database URL is configured, and by the HTTP tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{MessageRepository, StorageError, UserRepository};
use crate::domain::{Message, MessageId, NewMessage, NewUser, User, UserChanges, UserId};

const EMAIL_CONSTRAINT: &str = "users_email_key";
const OWNER_CONSTRAINT: &str = "messages_user_id_fkey";

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    messages: Vec<Message>,
    next_user_id: i32,
    next_message_id: i32,
}

impl Tables {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|user| user.email.as_ref() == email && Some(user.id) != except)
    }

    fn allocate_user_id(&mut self) -> Result<UserId, StorageError> {
        self.next_user_id += 1;
        UserId::new(self.next_user_id).map_err(|err| StorageError::query(err.to_string()))
    }

    fn allocate_message_id(&mut self) -> Result<MessageId, StorageError> {
        self.next_message_id += 1;
        MessageId::new(self.next_message_id).map_err(|err| StorageError::query(err.to_string()))
    }
}

/// Both repositories over one set of tables.
///
/// The lock is held only for the duration of one gateway call.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StorageError> {
        self.tables
            .lock()
            .map_err(|_| StorageError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: &NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables()?;
        if tables.email_taken(user.email.as_ref(), None) {
            return Err(StorageError::unique_violation(EMAIL_CONSTRAINT));
        }
        let now = Utc::now();
        let stored = User {
            id: tables.allocate_user_id()?,
            name: user.name.clone(),
            email: user.email.clone(),
            active: user.active,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.tables()?.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self.tables()?.users.iter().find(|user| user.id == id).cloned())
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<User, StorageError> {
        let mut tables = self.tables()?;
        let index = tables
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(StorageError::record_not_found)?;
        let email_taken = changes
            .email
            .as_ref()
            .is_some_and(|email| tables.email_taken(email.as_ref(), Some(id)));
        if email_taken {
            return Err(StorageError::unique_violation(EMAIL_CONSTRAINT));
        }

        let user = &mut tables.users[index];
        if changes.is_empty() {
            return Ok(user.clone());
        }
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(active) = changes.active {
            user.active = active;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, message: &NewMessage) -> Result<Message, StorageError> {
        let mut tables = self.tables()?;
        if !tables.users.iter().any(|user| user.id == message.user_id) {
            return Err(StorageError::foreign_key_violation(OWNER_CONSTRAINT));
        }
        let now = Utc::now();
        let stored = Message {
            id: tables.allocate_message_id()?,
            content: message.content.clone(),
            user_id: message.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.messages.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Message>, StorageError> {
        Ok(self.tables()?.messages.clone())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Message>, StorageError> {
        Ok(self
            .tables()?
            .messages
            .iter()
            .filter(|message| message.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, StorageError> {
        Ok(self
            .tables()?
            .messages
            .iter()
            .find(|message| message.id == id)
            .cloned())
    }

    async fn delete(&self, id: MessageId) -> Result<Message, StorageError> {
        let mut tables = self.tables()?;
        let index = tables
            .messages
            .iter()
            .position(|message| message.id == id)
            .ok_or_else(StorageError::record_not_found)?;
        Ok(tables.messages.remove(index))
    }
}
