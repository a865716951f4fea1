//! Concrete repository implementations.
//!
//! Single-row reads go through `fetch_first` with the `Default` row-count
//! policy; `RETURNING` statements and dependent second-step reads use
//! `Sequential` (the row must exist if the prior statement succeeded); list
//! queries go through `fetch_all`.

pub mod blog;
pub mod file;
pub mod member;
pub mod project;

pub use blog::BlogRepository;
pub use file::FileRepository;
pub use member::MemberRepository;
pub use project::ProjectRepository;
