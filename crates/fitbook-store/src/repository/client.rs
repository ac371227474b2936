//! In-memory implementation of [`ClientRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use fitbook_core::error::FitbookResult;
use fitbook_core::models::client::Client;
use fitbook_core::repository::ClientRepository;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryClientRepository {
    items: Arc<RwLock<HashMap<String, Client>>>,
}

impl MemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientRepository for MemoryClientRepository {
    async fn save(&self, client: Client) -> FitbookResult<Client> {
        self.items
            .write()
            .await
            .insert(client.client_id.clone(), client.clone());
        Ok(client)
    }

    async fn find_by_id(&self, client_id: &str) -> FitbookResult<Option<Client>> {
        Ok(self.items.read().await.get(client_id).cloned())
    }

    async fn find_all(&self) -> FitbookResult<Vec<Client>> {
        Ok(self.items.read().await.values().cloned().collect())
    }
}
