mod common;

use sqlx::PgPool;
use std::sync::Arc;

use bookmarks::domain::entities::{BookmarkPatch, NewBookmark};
use bookmarks::domain::repositories::BookmarkRepository;
use bookmarks::error::AppError;
use bookmarks::infrastructure::persistence::PgBookmarkRepository;

#[sqlx::test]
async fn test_create_bookmark(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let bookmark = repo
        .create(NewBookmark {
            body: Some("reading list".to_string()),
            url: "https://example.com".to_string(),
            short_code: "abcd1234".to_string(),
            user_id,
        })
        .await
        .unwrap();

    assert_eq!(bookmark.short_code, "abcd1234");
    assert_eq!(bookmark.visits, 0);
    assert_eq!(bookmark.user_id, user_id);
    assert_eq!(bookmark.body.as_deref(), Some("reading list"));
}

#[sqlx::test]
async fn test_create_duplicate_code_conflicts(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    common::create_test_bookmark(&pool, user_id, "dupecode", "https://example.com").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));
    let err = repo
        .create(NewBookmark {
            body: None,
            url: "https://example.com/other".to_string(),
            short_code: "dupecode".to_string(),
            user_id,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_short_code(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    common::create_test_bookmark(&pool, user_id, "findme01", "https://example.com").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let found = repo.find_by_short_code("findme01").await.unwrap();
    assert_eq!(found.unwrap().url, "https://example.com");

    let missing = repo.find_by_short_code("nope0000").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_newest_first_with_window(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    for i in 0..5 {
        sqlx::query(
            "INSERT INTO bookmarks (url, short_code, user_id, created_at)
             VALUES ($1, $2, $3, now() + ($4 || ' seconds')::interval)",
        )
        .bind(format!("https://example.com/{i}"))
        .bind(format!("window0{i}"))
        .bind(user_id)
        .bind(i.to_string())
        .execute(&pool)
        .await
        .unwrap();
    }

    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let first_page = repo.list(2, 0).await.unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].short_code, "window04");
    assert_eq!(first_page[1].short_code, "window03");

    let second_page = repo.list(2, 2).await.unwrap();
    assert_eq!(second_page[0].short_code, "window02");

    assert_eq!(repo.count().await.unwrap(), 5);
}

#[sqlx::test]
async fn test_list_by_user_excludes_others(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner999", "owner@example.com").await;
    let other = common::create_test_user(&pool, "other999", "other@example.com").await;
    common::create_test_bookmark(&pool, owner, "mine0001", "https://example.com/1").await;
    common::create_test_bookmark(&pool, owner, "mine0002", "https://example.com/2").await;
    common::create_test_bookmark(&pool, other, "theirs01", "https://example.com/3").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));
    let bookmarks = repo.list_by_user(owner).await.unwrap();

    assert_eq!(bookmarks.len(), 2);
    assert!(bookmarks.iter().all(|b| b.user_id == owner));
}

#[sqlx::test]
async fn test_update_patches_only_given_fields(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    let id = common::create_test_bookmark(&pool, user_id, "patchme1", "https://example.com").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            BookmarkPatch {
                body: Some("new note".to_string()),
                url: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.body.as_deref(), Some("new note"));
    assert_eq!(updated.url, "https://example.com");
    assert_eq!(updated.short_code, "patchme1");
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn test_update_unknown_id(pool: PgPool) {
    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let err = repo
        .update(
            424242,
            BookmarkPatch {
                body: Some("x".to_string()),
                url: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_reports_row_presence(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    let id = common::create_test_bookmark(&pool, user_id, "deleteme", "https://example.com").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_record_visit_increments(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "repouser", "repo@example.com").await;
    common::create_test_bookmark(&pool, user_id, "visitme1", "https://example.com").await;

    let repo = PgBookmarkRepository::new(Arc::new(pool));

    let first = repo.record_visit("visitme1").await.unwrap().unwrap();
    assert_eq!(first.visits, 1);

    let second = repo.record_visit("visitme1").await.unwrap().unwrap();
    assert_eq!(second.visits, 2);

    let unknown = repo.record_visit("missing1").await.unwrap();
    assert!(unknown.is_none());
}
