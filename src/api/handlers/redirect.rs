//! Handler for public short URL redirection.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored URL, counting the visit.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks/short/{code}` (public, no authentication)
///
/// The visit counter is incremented atomically in the same statement that
/// resolves the code, so concurrent redirects each count exactly once.
///
/// # Response
///
/// `302 Found` with the stored URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 if no bookmark has that short code.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = state.bookmark_service.resolve_visit(&code).await?;

    tracing::debug!("redirecting {code} (visit {})", bookmark.visits);

    Ok((StatusCode::FOUND, [(header::LOCATION, bookmark.url)]))
}
