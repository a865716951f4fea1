//! Blog services — publication lifecycle and comment moderation.

pub mod moderation;
pub mod service;

pub use moderation::CommentService;
pub use service::BlogService;
