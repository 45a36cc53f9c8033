//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod bookmark_repository;
pub mod reset_repository;
pub mod user_repository;

pub use bookmark_repository::BookmarkRepository;
pub use reset_repository::ResetRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use bookmark_repository::MockBookmarkRepository;
#[cfg(test)]
pub use reset_repository::MockResetRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
