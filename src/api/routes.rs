//! API route configuration.
//!
//! Routes are split into a public set and a protected set; the protected
//! set gets Bearer token authentication via [`crate::api::middleware::auth`]
//! attached by the top-level router.

use crate::api::handlers::{
    bookmark_list_handler, change_password_handler, create_bookmark_handler,
    delete_bookmark_handler, forgot_password_handler, login_handler, me_handler,
    my_bookmarks_handler, redirect_handler, refresh_handler, register_handler,
    reset_password_handler, update_bookmark_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes reachable without authentication.
///
/// # Endpoints
///
/// - `POST /auth/register`          - Create an account
/// - `POST /auth/login`             - Exchange credentials for a token pair
/// - `POST /auth/token/refresh`     - Mint a new access token from a refresh token
/// - `POST /auth/forgot-password`   - Request a password reset code by email
/// - `POST /auth/reset-password`    - Complete a reset with an emailed code
/// - `GET  /bookmarks`              - Paginated list of all bookmarks
/// - `GET  /bookmarks/short/{code}` - Redirect to the bookmarked URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/token/refresh", post(refresh_handler))
        .route("/auth/forgot-password", post(forgot_password_handler))
        .route("/auth/reset-password", post(reset_password_handler))
        .route("/bookmarks", get(bookmark_list_handler))
        .route("/bookmarks/short/{code}", get(redirect_handler))
}

/// Routes that require a valid access token.
///
/// # Endpoints
///
/// - `GET    /auth/me`              - The authenticated account
/// - `PUT    /auth/change-password` - Replace the account password
/// - `POST   /bookmarks`            - Create a bookmark
/// - `GET    /bookmarks/me`         - Bookmarks owned by the caller
/// - `PUT    /bookmarks/{id}`       - Update an owned bookmark
/// - `DELETE /bookmarks/{id}`       - Delete an owned bookmark
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me_handler))
        .route("/auth/change-password", put(change_password_handler))
        .route("/bookmarks", post(create_bookmark_handler))
        .route("/bookmarks/me", get(my_bookmarks_handler))
        .route(
            "/bookmarks/{id}",
            put(update_bookmark_handler).delete(delete_bookmark_handler),
        )
}
