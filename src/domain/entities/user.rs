//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` holds a salted bcrypt hash; the plaintext password is never
/// stored and the hash is never serialized into API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
