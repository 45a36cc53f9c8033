//! Bookmark creation, listing, mutation, and short-link resolution.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;
use crate::utils::short_code::generate_code;
use crate::utils::url_check::ensure_http_url;

/// A page of bookmarks together with the total row count.
#[derive(Debug)]
pub struct BookmarkPage {
    pub items: Vec<Bookmark>,
    pub total: i64,
}

/// Service for the ownership-scoped bookmark lifecycle.
///
/// Handles URL validation, short code generation with collision retry, and
/// the existence-then-ownership check order shared by update and delete.
pub struct BookmarkService<B: BookmarkRepository> {
    repository: Arc<B>,
}

impl<B: BookmarkRepository> BookmarkService<B> {
    /// Creates a new bookmark service.
    pub fn new(repository: Arc<B>) -> Self {
        Self { repository }
    }

    /// Creates a bookmark owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is missing or not a valid
    /// http(s) URL.
    pub async fn create(
        &self,
        user_id: i64,
        body: Option<String>,
        url: Option<String>,
    ) -> Result<Bookmark, AppError> {
        let Some(url) = url else {
            return Err(AppError::bad_request(
                "URL is required",
                json!({ "field": "url" }),
            ));
        };

        ensure_http_url(&url).map_err(|e| {
            AppError::bad_request("URL is invalid", json!({ "reason": e.to_string() }))
        })?;

        let short_code = self.generate_unique_code().await?;

        self.repository
            .create(NewBookmark {
                body,
                url,
                short_code,
                user_id,
            })
            .await
    }

    /// Lists bookmarks across all users, newest first.
    ///
    /// `page` is 1-indexed; the caller validates bounds before calling.
    pub async fn list_page(&self, page: i64, per_page: i64) -> Result<BookmarkPage, AppError> {
        let offset = (page - 1) * per_page;

        let items = self.repository.list(per_page, offset).await?;
        let total = self.repository.count().await?;

        Ok(BookmarkPage { items, total })
    }

    /// Lists every bookmark owned by `user_id`, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
        self.repository.list_by_user(user_id).await
    }

    /// Total number of bookmarks. Used by the health check.
    pub async fn total(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Partially updates a bookmark owned by `user_id`.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if `id` does not exist (checked first)
    /// - [`AppError::Forbidden`] if the bookmark belongs to someone else
    /// - [`AppError::Validation`] if a supplied `url` is invalid
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, AppError> {
        self.owned_bookmark(user_id, id).await?;

        if let Some(url) = &patch.url {
            ensure_http_url(url).map_err(|e| {
                AppError::bad_request("URL is invalid", json!({ "reason": e.to_string() }))
            })?;
        }

        self.repository.update(id, patch).await
    }

    /// Permanently deletes a bookmark owned by `user_id`.
    ///
    /// Same existence/ownership checks as [`Self::update`].
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        self.owned_bookmark(user_id, id).await?;

        let removed = self.repository.delete(id).await?;
        if !removed {
            // Deleted concurrently between the check and the delete
            return Err(bookmark_not_found(id));
        }

        Ok(())
    }

    /// Resolves a short code for redirection, counting the visit.
    ///
    /// The increment is atomic in the store, so every successful call adds
    /// exactly one visit even under concurrent redirects.
    pub async fn resolve_visit(&self, short_code: &str) -> Result<Bookmark, AppError> {
        self.repository
            .record_visit(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Unknown short link",
                    json!({ "short_code": short_code }),
                )
            })
    }

    /// Loads a bookmark and enforces ownership.
    async fn owned_bookmark(&self, user_id: i64, id: i64) -> Result<Bookmark, AppError> {
        let bookmark = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| bookmark_not_found(id))?;

        if !bookmark.is_owned_by(user_id) {
            return Err(AppError::forbidden(
                "You do not own this bookmark",
                json!({ "id": id }),
            ));
        }

        Ok(bookmark)
    }

    /// Generates a unique short code with collision retry.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_short_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

fn bookmark_not_found(id: i64) -> AppError {
    AppError::not_found("Bookmark not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBookmarkRepository;
    use chrono::Utc;

    fn test_bookmark(id: i64, user_id: i64, code: &str) -> Bookmark {
        let now = Utc::now();
        Bookmark {
            id,
            body: None,
            url: "https://example.com".to_string(),
            short_code: code.to_string(),
            visits: 0,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new_bookmark| {
            assert_eq!(new_bookmark.short_code.len(), 8);
            let mut created = test_bookmark(1, new_bookmark.user_id, &new_bookmark.short_code);
            created.url = new_bookmark.url;
            created.body = new_bookmark.body;
            Ok(created)
        });

        let svc = BookmarkService::new(Arc::new(repo));
        let bookmark = svc
            .create(7, Some("docs".to_string()), Some("https://example.com".to_string()))
            .await
            .unwrap();

        assert_eq!(bookmark.user_id, 7);
        assert_eq!(bookmark.visits, 0);
    }

    #[tokio::test]
    async fn test_create_requires_url() {
        let svc = BookmarkService::new(Arc::new(MockBookmarkRepository::new()));

        let err = svc.create(7, None, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("URL is required"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url() {
        let svc = BookmarkService::new(Arc::new(MockBookmarkRepository::new()));

        let err = svc
            .create(7, None, Some("not a url".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_retries_on_code_collision() {
        let mut repo = MockBookmarkRepository::new();
        let mut calls = 0;
        repo.expect_find_by_short_code().times(2).returning(move |code| {
            calls += 1;
            if calls == 1 {
                Ok(Some(test_bookmark(99, 1, code)))
            } else {
                Ok(None)
            }
        });
        repo.expect_create().times(1).returning(|new_bookmark| {
            Ok(test_bookmark(1, new_bookmark.user_id, &new_bookmark.short_code))
        });

        let svc = BookmarkService::new(Arc::new(repo));
        svc.create(1, None, Some("https://example.com".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_bookmark_is_not_found() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let svc = BookmarkService::new(Arc::new(repo));
        let err = svc
            .update(
                1,
                42,
                BookmarkPatch {
                    body: None,
                    url: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_forbidden() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_bookmark(id, 1, "abc12345"))));

        let svc = BookmarkService::new(Arc::new(repo));
        let err = svc
            .update(
                2,
                42,
                BookmarkPatch {
                    body: Some("mine now".to_string()),
                    url: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_update_validates_supplied_url() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_bookmark(id, 1, "abc12345"))));

        let svc = BookmarkService::new(Arc::new(repo));
        let err = svc
            .update(
                1,
                42,
                BookmarkPatch {
                    body: None,
                    url: Some("nope".to_string()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_success_passes_patch_through() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_bookmark(id, 1, "abc12345"))));
        repo.expect_update()
            .times(1)
            .withf(|id, patch| *id == 42 && patch.url.as_deref() == Some("https://new.example.com"))
            .returning(|id, _| Ok(test_bookmark(id, 1, "abc12345")));

        let svc = BookmarkService::new(Arc::new(repo));
        svc.update(
            1,
            42,
            BookmarkPatch {
                body: None,
                url: Some("https://new.example.com".to_string()),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_forbidden() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_bookmark(id, 1, "abc12345"))));

        let svc = BookmarkService::new(Arc::new(repo));
        let err = svc.delete(2, 42).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_bookmark(id, 1, "abc12345"))));
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let svc = BookmarkService::new(Arc::new(repo));
        svc.delete(1, 42).await.unwrap();
    }

    #[tokio::test]
    async fn test_resolve_visit_unknown_code() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_record_visit().returning(|_| Ok(None));

        let svc = BookmarkService::new(Arc::new(repo));
        let err = svc.resolve_visit("missing1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_visit_returns_bookmark() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_record_visit().returning(|code| {
            let mut b = test_bookmark(5, 1, code);
            b.visits = 3;
            Ok(Some(b))
        });

        let svc = BookmarkService::new(Arc::new(repo));
        let bookmark = svc.resolve_visit("abc12345").await.unwrap();
        assert_eq!(bookmark.visits, 3);
        assert_eq!(bookmark.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_list_page_combines_items_and_total() {
        let mut repo = MockBookmarkRepository::new();
        repo.expect_list()
            .withf(|limit, offset| *limit == 3 && *offset == 3)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    test_bookmark(4, 1, "code0004"),
                    test_bookmark(5, 1, "code0005"),
                    test_bookmark(6, 2, "code0006"),
                ])
            });
        repo.expect_count().times(1).returning(|| Ok(7));

        let svc = BookmarkService::new(Arc::new(repo));
        let page = svc.list_page(2, 3).await.unwrap();

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 7);
    }
}
