use async_trait::async_trait;
use cine_core::{Booking, BookingStore, StoreError, StoreResult};
use std::sync::Mutex;

/// Always-accept or always-reject booking store for pipeline tests
pub struct StubBookingStore {
    accept: bool,
    created: Mutex<Vec<Booking>>,
}

impl StubBookingStore {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            created: Mutex::new(Vec::new()),
        }
    }

    /// Bookings the stub has accepted so far
    pub fn created(&self) -> Vec<Booking> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Booking>> {
        self.created.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BookingStore for StubBookingStore {
    async fn create(&self, booking: &Booking) -> StoreResult<Booking> {
        if !self.accept {
            return Err(StoreError::Network("stub store is offline".to_string()));
        }
        let mut created = booking.clone();
        created.id = Some(format!("stub-{}", booking.booking_ref));
        self.lock().push(created.clone());
        Ok(created)
    }

    async fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<Booking>> {
        if !self.accept {
            return Err(StoreError::Network("stub store is offline".to_string()));
        }
        Ok(self.lock().iter().filter(|b| b.user_id == user_id).cloned().collect())
    }

    async fn cancel(&self, booking_id: &str) -> StoreResult<()> {
        if !self.accept {
            return Err(StoreError::Network("stub store is offline".to_string()));
        }
        let mut created = self.lock();
        let before = created.len();
        created.retain(|b| b.id.as_deref() != Some(booking_id));
        if created.len() == before {
            return Err(StoreError::Rejected(404));
        }
        Ok(())
    }
}
