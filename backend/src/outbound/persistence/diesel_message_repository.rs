//! PostgreSQL-backed [`MessageRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MessageRepository, StorageError};
use crate::domain::{Message, MessageId, NewMessage, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MessageRow, NewMessageRow, collect_rows};
use super::pool::DbPool;
use super::schema::messages;

/// Diesel implementation of the message half of the Storage Gateway.
///
/// Owner existence is enforced by `messages_user_id_fkey`, which surfaces as
/// [`StorageError::ForeignKeyViolation`].
#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
}

impl DieselMessageRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewMessageRow {
            content: message.content.as_ref(),
            user_id: message.user_id.get(),
        };

        let stored: MessageRow = diesel::insert_into(messages::table)
            .values(&row)
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Message::try_from(stored)
    }

    async fn list(&self) -> Result<Vec<Message>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MessageRow> = messages::table
            .select(MessageRow::as_select())
            .order(messages::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Message>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MessageRow> = messages::table
            .filter(messages::user_id.eq(user_id.get()))
            .select(MessageRow::as_select())
            .order(messages::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MessageRow> = messages::table
            .find(id.get())
            .select(MessageRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Message::try_from).transpose()
    }

    async fn delete(&self, id: MessageId) -> Result<Message, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed: MessageRow = diesel::delete(messages::table.find(id.get()))
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Message::try_from(removed)
    }
}
