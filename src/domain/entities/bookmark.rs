//! Bookmark entity representing a saved URL with its short alias.

use chrono::{DateTime, Utc};

/// A saved bookmark owned by a single user.
///
/// `short_code` is the globally unique alias used for public redirection;
/// `visits` counts successful redirects and never decreases.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub body: Option<String>,
    pub url: String,
    pub short_code: String,
    pub visits: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Returns true if the given user owns this bookmark.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new bookmark.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub body: Option<String>,
    pub url: String,
    pub short_code: String,
    pub user_id: i64,
}

/// Partial update for an existing bookmark.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct BookmarkPatch {
    pub body: Option<String>,
    pub url: Option<String>,
}
