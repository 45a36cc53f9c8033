#![allow(dead_code)]

use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use bookmarks::api;
use bookmarks::api::handlers::health_handler;
use bookmarks::api::middleware::auth;
use bookmarks::application::services::{AccountService, BookmarkService, TokenService};
use bookmarks::infrastructure::mail::LogMailer;
use bookmarks::infrastructure::persistence::{
    PgBookmarkRepository, PgResetRepository, PgUserRepository,
};
use bookmarks::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_BASE_URL: &str = "http://localhost:8000";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let reset_repo = Arc::new(PgResetRepository::new(pool.clone()));
    let bookmark_repo = Arc::new(PgBookmarkRepository::new(pool.clone()));

    let account_service = Arc::new(AccountService::new(
        user_repo,
        reset_repo,
        Arc::new(LogMailer::new()),
        TEST_SECRET.to_string(),
        Duration::from_secs(300),
    ));
    let bookmark_service = Arc::new(BookmarkService::new(bookmark_repo));
    let token_service = Arc::new(TokenService::new(
        TEST_SECRET,
        Duration::from_secs(900),
        Duration::from_secs(86_400),
    ));

    AppState::new(
        account_service,
        bookmark_service,
        token_service,
        TEST_BASE_URL.to_string(),
    )
}

/// Full route tree minus rate limiting (which needs a socket peer address).
pub fn test_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let v1 = Router::new().merge(protected).merge(api::routes::public_routes());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", v1)
        .with_state(state)
}

pub fn test_server(pool: PgPool) -> (TestServer, AppState) {
    let state = create_test_state(pool);
    let server = TestServer::new(test_router(state.clone())).unwrap();
    (server, state)
}

pub async fn create_test_user(pool: &PgPool, username: &str, email: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind("$2b$04$invalidhashforseedrowsonly000000000000000000000000000")
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_bookmark(pool: &PgPool, user_id: i64, code: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO bookmarks (body, url, short_code, user_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(format!("note for {code}"))
    .bind(url)
    .bind(code)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn bookmark_visits(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visits FROM bookmarks WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Registers through the API, asserting success.
pub async fn register(server: &TestServer, username: &str, email: &str, password: &str) {
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({ "username": username, "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
}

/// Logs in through the API and returns the full token response.
pub async fn login(server: &TestServer, email: &str, password: &str) -> serde_json::Value {
    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()
}

/// Registers a fresh account and returns its access token.
pub async fn access_token(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
) -> String {
    register(server, username, email, password).await;
    let tokens = login(server, email, password).await;
    tokens["access"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
