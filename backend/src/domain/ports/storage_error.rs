//! Closed error union raised by Storage Gateway adapters.
//!
//! Adapters classify driver failures into these variants once; services then
//! match exhaustively instead of inspecting vendor error codes.

use super::define_port_error;

define_port_error! {
    /// Tagged storage failure shared by the user and message repositories.
    pub enum StorageError {
        /// A unique constraint rejected the write.
        UniqueViolation { constraint: String } =>
            "unique constraint violated: {constraint}",
        /// A foreign-key constraint rejected the write.
        ForeignKeyViolation { constraint: String } =>
            "foreign key constraint violated: {constraint}",
        /// The addressed row does not exist.
        RecordNotFound => "record not found",
        /// The store could not be reached.
        Connection { message: String } => "storage connection failed: {message}",
        /// Any other query or mutation failure.
        Query { message: String } => "storage query failed: {message}",
    }
}
