//! Repository trait for bookmark data access.

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing bookmarks.
///
/// Provides CRUD operations plus the atomic visit counter used by the public
/// redirect endpoint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookmarkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Creates a new bookmark with `visits = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError>;

    /// Finds a bookmark by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError>;

    /// Finds a bookmark by its short code.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Bookmark>, AppError>;

    /// Lists bookmarks across all users, newest first.
    ///
    /// # Arguments
    ///
    /// - `limit` / `offset` - SQL pagination window
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Bookmark>, AppError>;

    /// Counts all bookmarks.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists all bookmarks owned by a user, newest first.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError>;

    /// Partially updates a bookmark and refreshes `updated_at`.
    ///
    /// Only fields present in [`BookmarkPatch`] are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bookmark matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<Bookmark, AppError>;

    /// Permanently deletes a bookmark.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the visit counter for a short code.
    ///
    /// Returns the bookmark after the increment, or `None` if the code is
    /// unknown. The increment happens in a single UPDATE so concurrent
    /// redirects never lose counts.
    async fn record_visit(&self, short_code: &str) -> Result<Option<Bookmark>, AppError>;
}
