//! PostgreSQL Storage Gateway using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain
//! aggregates. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module, and every driver failure is classified into
//! [`StorageError`](crate::domain::ports::StorageError) before it leaves.
//!
//! # Example
//!
//! ```no_run
//! use postbox::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), postbox::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/postbox")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_message_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_message_repository::DieselMessageRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
