//! Client domain model.

use serde::{Deserialize, Serialize};

/// A person who books training sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub client_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub fitness_goals: Option<String>,
}

/// Input for registering a new client profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub fitness_goals: Option<String>,
}
