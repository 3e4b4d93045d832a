//! Outbound adapters implementing the domain's Storage Gateway ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: in-process repositories with the same constraint semantics.
//!
//! Adapters translate between domain types and storage representations and
//! classify failures into `StorageError`. They hold no business logic.

pub mod memory;
pub mod persistence;
