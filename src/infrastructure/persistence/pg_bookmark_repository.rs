//! PostgreSQL implementation of the bookmark repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Bookmark, BookmarkPatch, NewBookmark};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;

const BOOKMARK_COLUMNS: &str =
    "id, body, url, short_code, visits, user_id, created_at, updated_at";

/// PostgreSQL repository for bookmark storage and visit counting.
pub struct PgBookmarkRepository {
    pool: Arc<PgPool>,
}

impl PgBookmarkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            INSERT INTO bookmarks (body, url, short_code, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {BOOKMARK_COLUMNS}
            "#,
        ))
        .bind(&new_bookmark.body)
        .bind(&new_bookmark.url)
        .bind(&new_bookmark.short_code)
        .bind(new_bookmark.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE short_code = $1",
        ))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Bookmark>, AppError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(bookmarks)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookmarks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        ))
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(bookmarks)
    }

    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<Bookmark, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            UPDATE bookmarks
            SET body = COALESCE($2, body),
                url = COALESCE($3, url),
                updated_at = now()
            WHERE id = $1
            RETURNING {BOOKMARK_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(&patch.body)
        .bind(&patch.url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        bookmark.ok_or_else(|| AppError::not_found("Bookmark not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_visit(&self, short_code: &str) -> Result<Option<Bookmark>, AppError> {
        // Single UPDATE keeps the counter exact under concurrent redirects
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            UPDATE bookmarks
            SET visits = visits + 1
            WHERE short_code = $1
            RETURNING {BOOKMARK_COLUMNS}
            "#,
        ))
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }
}
