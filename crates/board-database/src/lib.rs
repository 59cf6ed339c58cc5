//! # board-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Maru Board entities.
//!
//! Repositories implement the soft-delete contract: lookups filter out
//! deleted rows, deletes flip the flag and stamp the time, and partial
//! updates touch only the supplied columns.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
