//! # ortus-core
//!
//! Core crate for the Ortus Foundation platform. Contains the typed
//! result/error contract used by every server-side data operation, the
//! database interaction adapter, configuration schemas, feature flags,
//! and shared pagination types.
//!
//! This crate has **no** internal dependencies on other Ortus crates.

pub mod config;
pub mod error;
pub mod flags;
pub mod interaction;
pub mod response;
pub mod result;
pub mod types;

pub use error::{ApiError, ErrorDetail, ErrorKind};
pub use response::ApiResponse;
pub use result::ApiResult;
