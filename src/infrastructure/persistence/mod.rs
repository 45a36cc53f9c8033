//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters for SQL injection protection.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage
//! - [`PgBookmarkRepository`] - Bookmark storage and visit counting
//! - [`PgResetRepository`] - Password reset code storage

pub mod pg_bookmark_repository;
pub mod pg_reset_repository;
pub mod pg_user_repository;

pub use pg_bookmark_repository::PgBookmarkRepository;
pub use pg_reset_repository::PgResetRepository;
pub use pg_user_repository::PgUserRepository;
