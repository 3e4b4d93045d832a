//! Classification of Diesel and pool failures into [`StorageError`].
//!
//! Repositories call these helpers once per failure; nothing above the
//! persistence layer ever sees a Diesel error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StorageError;

use super::pool::PoolError;

const UNNAMED_CONSTRAINT: &str = "unnamed";

/// Pool failures mean the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> StorageError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StorageError::connection(message)
        }
    }
}

/// Map a Diesel error onto the closed storage error union.
pub(crate) fn map_diesel_error(error: DieselError) -> StorageError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StorageError::record_not_found(),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StorageError::unique_violation(info.constraint_name().unwrap_or(UNNAMED_CONSTRAINT))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StorageError::foreign_key_violation(
                info.constraint_name().unwrap_or(UNNAMED_CONSTRAINT),
            )
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StorageError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => StorageError::query(info.message()),
        DieselError::QueryBuilderError(err) => {
            StorageError::query(format!("database query error: {err}"))
        }
        other => StorageError::query(other.to_string()),
    }
}
