//! Handlers for bookmark CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::bookmark::{
    BookmarkListResponse, BookmarkResponse, CreateBookmarkRequest, PagedBookmarksResponse,
    UpdateBookmarkRequest,
};
use crate::api::dto::pagination::{PageMeta, PageParams};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::BookmarkPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Lists bookmarks across all users with pagination.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks?page=1&per_page=3` (public)
///
/// # Errors
///
/// Returns 400 for `page = 0` or `per_page` outside 1..=100.
pub async fn bookmark_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PagedBookmarksResponse>, AppError> {
    let (page, per_page) = params
        .validate()
        .map_err(|reason| AppError::bad_request(reason, json!({})))?;

    let page_data = state.bookmark_service.list_page(page, per_page).await?;

    let bookmarks = page_data
        .items
        .iter()
        .map(|b| BookmarkResponse::from_entity(b, &state.base_url))
        .collect();

    Ok(Json(PagedBookmarksResponse {
        bookmarks,
        meta: PageMeta::new(page_data.total, page, per_page),
    }))
}

/// Creates a bookmark owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/v1/bookmarks`
///
/// # Errors
///
/// Returns 400 if `url` is missing or invalid.
pub async fn create_bookmark_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), AppError> {
    let bookmark = state
        .bookmark_service
        .create(user_id, payload.body, payload.url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookmarkResponse::from_entity(&bookmark, &state.base_url)),
    ))
}

/// Lists every bookmark owned by the authenticated user.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks/me`
pub async fn my_bookmarks_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<BookmarkListResponse>, AppError> {
    let bookmarks = state.bookmark_service.list_for_user(user_id).await?;

    Ok(Json(BookmarkListResponse {
        bookmarks: bookmarks
            .iter()
            .map(|b| BookmarkResponse::from_entity(b, &state.base_url))
            .collect(),
    }))
}

/// Partially updates a bookmark owned by the authenticated user.
///
/// # Endpoint
///
/// `PUT /api/v1/bookmarks/{id}`
///
/// # Errors
///
/// 404 if the id is unknown, 403 if owned by someone else, 400 for an
/// invalid replacement URL.
pub async fn update_bookmark_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, AppError> {
    let bookmark = state
        .bookmark_service
        .update(
            user_id,
            id,
            BookmarkPatch {
                body: payload.body,
                url: payload.url,
            },
        )
        .await?;

    Ok(Json(BookmarkResponse::from_entity(&bookmark, &state.base_url)))
}

/// Permanently deletes a bookmark owned by the authenticated user.
///
/// # Endpoint
///
/// `DELETE /api/v1/bookmarks/{id}`
pub async fn delete_bookmark_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.bookmark_service.delete(user_id, id).await?;

    Ok(Json(json!({ "message": "Bookmark deleted" })))
}
