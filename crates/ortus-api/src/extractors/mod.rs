//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AdminGate, MaybeViewer};
pub use pagination::PaginationParams;
