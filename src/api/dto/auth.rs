//! DTOs for authentication endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::api::dto::user::UserDescriptor;

/// Compiled regex for reset code validation.
static RESET_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Request body for `POST /api/v1/auth/register`.
///
/// Field-level rules (lengths, charset, email syntax) are checked by the
/// account service so the first failing rule is reported in order.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserDescriptor,
}

/// Request body for `POST /api/v1/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub username: String,
    pub email: String,
}

/// Response body for `POST /api/v1/auth/token/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Request body for `PUT /api/v1/auth/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Request body for `POST /api/v1/auth/forgot-password`.
///
/// `email` is optional at the serde level so a missing field produces the
/// endpoint's own 400 rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for `POST /api/v1/auth/reset-password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    /// The 6-digit code from the reset email.
    #[validate(regex(path = "*RESET_CODE_REGEX", message = "Code must be 6 digits"))]
    pub code: String,

    pub new_password: String,
}

/// Generic success body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
