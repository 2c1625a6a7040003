use async_trait::async_trait;
use cine_core::{Booking, BookingStore, StoreError, StoreResult};
use serde::Deserialize;
use tracing::info;

/// Remote booking store over JSON-HTTP.
///
/// POST /api/bookings creates, GET /api/bookings?userId= lists,
/// DELETE /api/bookings/:id cancels. Any non-2xx response maps to
/// `StoreError::Rejected`; transport failures map to `StoreError::Network`.
pub struct HttpBookingStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct BookingListResponse {
    bookings: Vec<Booking>,
}

impl HttpBookingStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }
}

#[async_trait]
impl BookingStore for HttpBookingStore {
    async fn create(&self, booking: &Booking) -> StoreResult<Booking> {
        let url = self.collection_url();
        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(response.status().as_u16()));
        }

        let created: Booking = response.json().await.map_err(|e| StoreError::Malformed {
            key: url,
            reason: e.to_string(),
        })?;
        info!("Booking stored remotely: {}", created.booking_ref);
        Ok(created)
    }

    async fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<Booking>> {
        let url = self.collection_url();
        let response = self
            .client
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(response.status().as_u16()));
        }

        let list: BookingListResponse = response.json().await.map_err(|e| StoreError::Malformed {
            key: url,
            reason: e.to_string(),
        })?;
        Ok(list.bookings)
    }

    async fn cancel(&self, booking_id: &str) -> StoreResult<()> {
        let url = format!("{}/{}", self.collection_url(), booking_id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Rejected(response.status().as_u16()));
        }
        Ok(())
    }
}
