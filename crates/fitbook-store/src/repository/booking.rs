//! In-memory implementation of [`BookingRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use fitbook_core::error::FitbookResult;
use fitbook_core::models::booking::BookingSession;
use fitbook_core::repository::BookingRepository;
use tokio::sync::RwLock;

/// Booking storage over a shared map keyed by booking id.
#[derive(Clone, Default)]
pub struct MemoryBookingRepository {
    items: Arc<RwLock<HashMap<String, BookingSession>>>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingRepository for MemoryBookingRepository {
    async fn save(&self, booking: BookingSession) -> FitbookResult<BookingSession> {
        self.items
            .write()
            .await
            .insert(booking.booking_id.clone(), booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, booking_id: &str) -> FitbookResult<Option<BookingSession>> {
        Ok(self.items.read().await.get(booking_id).cloned())
    }

    async fn find_all(&self) -> FitbookResult<Vec<BookingSession>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn find_by_client_id(&self, client_id: &str) -> FitbookResult<Vec<BookingSession>> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|b| b.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn find_by_trainer_id(&self, trainer_id: &str) -> FitbookResult<Vec<BookingSession>> {
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|b| b.trainer_id == trainer_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, booking_id: &str) -> FitbookResult<bool> {
        Ok(self.items.write().await.remove(booking_id).is_some())
    }
}
