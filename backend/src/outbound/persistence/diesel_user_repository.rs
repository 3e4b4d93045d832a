//! PostgreSQL-backed [`UserRepository`] using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StorageError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow, collect_rows};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the user half of the Storage Gateway.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewUserRow {
            name: user.name.as_ref(),
            email: user.email.as_ref(),
            active: user.active,
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        User::try_from(stored)
    }

    async fn list(&self) -> Result<Vec<User>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<User, StorageError> {
        // Diesel rejects an empty changeset; an empty update is a plain read.
        if changes.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(StorageError::record_not_found);
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let stored: UserRow = diesel::update(users::table.find(id.get()))
            .set(UserChangeset::from(changes))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        User::try_from(stored)
    }
}
