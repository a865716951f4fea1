//! Stored file services.

pub mod service;

pub use service::FileService;
