//! # ortus-api
//!
//! HTTP API layer for the Ortus Foundation platform: router, handlers,
//! DTOs, middleware, and the mapping from the typed outcome vocabulary to
//! HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
