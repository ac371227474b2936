//! Stub implementation of the external Scheduling Context.

use std::collections::HashSet;
use std::sync::Arc;

use fitbook_core::error::FitbookResult;
use fitbook_core::models::slot::TimeSlot;
use fitbook_core::repository::SchedulingApi;
use tokio::sync::RwLock;

/// Development stand-in for the Scheduling Context API.
///
/// Reports every trainer as available unless the trainer id has been
/// marked unavailable through [`mark_unavailable`].
///
/// [`mark_unavailable`]: StubSchedulingApi::mark_unavailable
#[derive(Clone, Default)]
pub struct StubSchedulingApi {
    unavailable: Arc<RwLock<HashSet<String>>>,
}

impl StubSchedulingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent availability checks for this trainer fail.
    pub async fn mark_unavailable(&self, trainer_id: &str) {
        self.unavailable.write().await.insert(trainer_id.to_string());
    }

    /// Undo [`mark_unavailable`](StubSchedulingApi::mark_unavailable).
    pub async fn mark_available(&self, trainer_id: &str) {
        self.unavailable.write().await.remove(trainer_id);
    }
}

impl SchedulingApi for StubSchedulingApi {
    async fn check_availability(&self, trainer_id: &str, _slot: &TimeSlot) -> FitbookResult<bool> {
        Ok(!self.unavailable.read().await.contains(trainer_id))
    }
}
