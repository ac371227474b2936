//! User domain model — authentication identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Trainer,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    /// Argon2id PHC-format hash.
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// New active user with the creation timestamp set to now.
    pub fn new(user_id: String, email: String, password_hash: String, role: UserRole) -> Self {
        Self {
            user_id,
            email,
            password_hash,
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
