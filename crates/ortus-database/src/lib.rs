//! # ortus-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Ortus Foundation entities. Every repository
//! query is classified through the core database interaction adapter.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
