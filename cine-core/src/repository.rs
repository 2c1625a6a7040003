use crate::models::Booking;
use crate::StoreResult;
use async_trait::async_trait;

/// Remote booking store contract (a JSON-over-HTTP resource).
///
/// Any non-success response or transport failure surfaces as an error; the
/// submission pipeline decides what failure means.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a booking and return the stored record
    async fn create(&self, booking: &Booking) -> StoreResult<Booking>;

    /// All bookings belonging to one user
    async fn list_for_user(&self, user_id: &str) -> StoreResult<Vec<Booking>>;

    /// Cancel a previously stored booking by its server-assigned id
    async fn cancel(&self, booking_id: &str) -> StoreResult<()>;
}

/// Durable key-value text store on the user's device.
///
/// Holds the `bookings` fallback log and the per-showtime seat map cache
/// (`reservedSeats-{movieId}-{date}-{time}`).
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
