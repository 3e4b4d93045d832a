//! Embedded schema migrations.
//!
//! `diesel_migrations` drives a synchronous `PgConnection`, so the async entry
//! point hands the work to a blocking thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled in from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open the migration connection.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
    /// The blocking task panicked or was cancelled.
    #[error("migration task failed: {0}")]
    Task(String),
}

/// Apply pending migrations synchronously.
///
/// # Errors
/// See [`MigrationError`].
pub fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}

/// Apply pending migrations on a blocking thread.
///
/// # Errors
/// See [`MigrationError`].
pub async fn run_migrations(database_url: String) -> Result<usize, MigrationError> {
    tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| MigrationError::Task(err.to_string()))?
}
