//! In-memory implementation of [`UserRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use fitbook_core::error::FitbookResult;
use fitbook_core::models::user::User;
use fitbook_core::repository::UserRepository;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    items: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn save(&self, user: User) -> FitbookResult<User> {
        self.items
            .write()
            .await
            .insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: &str) -> FitbookResult<Option<User>> {
        Ok(self.items.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> FitbookResult<Option<User>> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_all(&self) -> FitbookResult<Vec<User>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
