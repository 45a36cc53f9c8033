//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: database connectivity (public)
//! - `/api/v1/*`    - REST API; a public subset plus a Bearer-protected subset
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on authenticated routes
//! - **Authentication** - Bearer access token on the protected subset
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Authentication is attached with `route_layer` so unknown paths still
/// answer 404 instead of 401.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let public = api::routes::public_routes().layer(rate_limit::layer());

    let v1 = Router::new().merge(protected).merge(public);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", v1)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
