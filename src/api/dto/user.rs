//! Public user representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::User;

/// Public view of an account. The password hash is never exposed.
#[derive(Debug, Serialize)]
pub struct UserDescriptor {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDescriptor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
