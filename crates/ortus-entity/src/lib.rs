//! # ortus-entity
//!
//! Domain entity models for the Ortus Foundation platform. Every struct in
//! this crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod blog;
pub mod file;
pub mod project;
pub mod team;
