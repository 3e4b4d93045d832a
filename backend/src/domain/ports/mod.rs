//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) form the Storage Gateway; driving ports
//! (`UserDirectory`, `MessageLedger`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod message_ledger;
mod message_repository;
mod storage_error;
mod user_directory;
mod user_repository;

#[cfg(test)]
pub use message_ledger::MockMessageLedger;
pub use message_ledger::MessageLedger;
#[cfg(test)]
pub use message_repository::MockMessageRepository;
pub use message_repository::MessageRepository;
pub use storage_error::StorageError;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
