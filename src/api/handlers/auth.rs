//! Handlers for authentication and account endpoints.

use axum::{
    Extension, Json,
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
};
use axum_auth::AuthBearer;
use serde_json::json;
use validator::Validate;

use crate::api::dto::auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RefreshResponse, RegisterRequest, RegisterResponse, ResetPasswordRequest,
};
use crate::api::dto::user::UserDescriptor;
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::TokenUse;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
///
/// # Errors
///
/// Returns 400 for the first failing validation rule and 409 when the email
/// (checked first) or username is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = state
        .account_service
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created".to_string(),
            user: UserDescriptor::from(&user),
        }),
    ))
}

/// Verifies credentials and issues an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Errors
///
/// Returns the same generic 401 for unknown email and wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .account_service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let pair = state.token_service.issue_pair(user.id)?;

    Ok(Json(LoginResponse {
        access: pair.access,
        refresh: pair.refresh,
        username: user.username,
        email: user.email,
    }))
}

/// Returns the authenticated account.
///
/// # Endpoint
///
/// `GET /api/v1/auth/me`
///
/// # Errors
///
/// Returns 404 if the account behind a still-valid token no longer exists.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<UserDescriptor>, AppError> {
    let user = state.account_service.current_user(user_id).await?;
    Ok(Json(UserDescriptor::from(&user)))
}

/// Mints a new access token from a refresh token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/token/refresh`
///
/// The refresh token is presented as the Bearer credential; access tokens
/// are rejected here. The refresh token itself is not rotated.
pub async fn refresh_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<RefreshResponse>, AppError> {
    let (mut parts, _body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user_id = state.token_service.verify(&token, TokenUse::Refresh)?;
    let access = state.token_service.issue(user_id, TokenUse::Access)?;

    Ok(Json(RefreshResponse { access }))
}

/// Replaces the password for the authenticated account.
///
/// # Endpoint
///
/// `PUT /api/v1/auth/change-password`
///
/// # Errors
///
/// 401 when the old password is wrong; 400 when the new password reuses the
/// old one or the confirmation mismatches.
pub async fn change_password_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .account_service
        .change_password(
            user_id,
            &payload.old_password,
            &payload.new_password,
            &payload.confirm_password,
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}

/// Issues a password reset code by email.
///
/// # Endpoint
///
/// `POST /api/v1/auth/forgot-password`
///
/// Always answers 200 for well-formed requests so the response does not
/// reveal whether the address is registered.
pub async fn forgot_password_handler(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = payload.email.unwrap_or_default();

    state.account_service.request_password_reset(&email).await?;

    Ok(Json(MessageResponse {
        message: "If the email is registered, a reset code has been sent".to_string(),
    }))
}

/// Completes a password reset with a previously issued code.
///
/// # Endpoint
///
/// `POST /api/v1/auth/reset-password`
pub async fn reset_password_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .account_service
        .reset_password(&payload.email, &payload.code, &payload.new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}
