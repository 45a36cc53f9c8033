//! DTOs for bookmark endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::PageMeta;
use crate::domain::entities::Bookmark;

/// Request body for `POST /api/v1/bookmarks`.
///
/// `url` is optional at the serde level so a missing field produces the
/// endpoint's own "URL is required" 400 rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// Request body for `PUT /api/v1/bookmarks/{id}`.
///
/// All fields are optional — only provided fields are changed.
#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// JSON representation of a bookmark returned by the API.
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub body: Option<String>,
    pub url: String,
    pub short_code: String,
    /// Fully qualified redirect URL for sharing.
    pub short_url: String,
    pub visits: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookmarkResponse {
    /// Builds the response view, rendering the public short URL.
    pub fn from_entity(bookmark: &Bookmark, base_url: &str) -> Self {
        Self {
            id: bookmark.id,
            body: bookmark.body.clone(),
            url: bookmark.url.clone(),
            short_code: bookmark.short_code.clone(),
            short_url: format!(
                "{}/api/v1/bookmarks/short/{}",
                base_url.trim_end_matches('/'),
                bookmark.short_code
            ),
            visits: bookmark.visits,
            user_id: bookmark.user_id,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

/// Response body for the unpaginated owner listing.
#[derive(Debug, Serialize)]
pub struct BookmarkListResponse {
    pub bookmarks: Vec<BookmarkResponse>,
}

/// Response body for the public paginated listing.
#[derive(Debug, Serialize)]
pub struct PagedBookmarksResponse {
    pub bookmarks: Vec<BookmarkResponse>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_rendering() {
        let now = Utc::now();
        let bookmark = Bookmark {
            id: 1,
            body: None,
            url: "https://example.com".to_string(),
            short_code: "Ab3xYz_0".to_string(),
            visits: 2,
            user_id: 7,
            created_at: now,
            updated_at: now,
        };

        let resp = BookmarkResponse::from_entity(&bookmark, "http://localhost:3000/");
        assert_eq!(
            resp.short_url,
            "http://localhost:3000/api/v1/bookmarks/short/Ab3xYz_0"
        );
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreateBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
        assert!(req.body.is_none());
    }
}
