//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: a mutex-guarded store used when no database is configured
//!   and by the behaviour tests.
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no admission rules.

pub mod memory;
pub mod persistence;
