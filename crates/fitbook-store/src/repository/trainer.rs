//! In-memory implementation of [`TrainerRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use fitbook_core::error::FitbookResult;
use fitbook_core::models::trainer::Trainer;
use fitbook_core::repository::TrainerRepository;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryTrainerRepository {
    items: Arc<RwLock<HashMap<String, Trainer>>>,
}

impl MemoryTrainerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrainerRepository for MemoryTrainerRepository {
    async fn save(&self, trainer: Trainer) -> FitbookResult<Trainer> {
        self.items
            .write()
            .await
            .insert(trainer.trainer_id.clone(), trainer.clone());
        Ok(trainer)
    }

    async fn find_by_id(&self, trainer_id: &str) -> FitbookResult<Option<Trainer>> {
        Ok(self.items.read().await.get(trainer_id).cloned())
    }

    async fn find_all(&self) -> FitbookResult<Vec<Trainer>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
