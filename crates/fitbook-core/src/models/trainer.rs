//! Trainer domain model.

use serde::{Deserialize, Serialize};

/// A personal trainer offering bookable sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub trainer_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Option<String>,
    pub certification: Option<String>,
    pub experience_years: Option<u32>,
}

/// Input for registering a new trainer profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Option<String>,
    pub certification: Option<String>,
    pub experience_years: Option<u32>,
}
