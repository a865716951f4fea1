//! # ortus-service
//!
//! Business services for the Ortus Foundation platform. Services compose
//! repository calls and produce the full response vocabulary — partial
//! results, fail-forwards, and inconsequential outcomes included.

pub mod blog;
pub mod file;
pub mod project;
pub mod team;
pub mod viewer;

pub use viewer::Viewer;
