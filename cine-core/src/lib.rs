pub mod clock;
pub mod identity;
pub mod models;
pub mod repository;
pub mod seat;
pub mod timing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::{CurrentUser, IdentityProvider, StaticIdentity};
pub use models::{Booking, MovieInfo, ShowtimeKey, SEAT_PRICE};
pub use repository::{BookingStore, KvStore};
pub use seat::{SeatId, HALF_BLOCK, ROWS, SEATS_PER_ROW, TOTAL_SEATS};
pub use timing::ShowTiming;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Booking store rejected the request with status {0}")]
    Rejected(u16),
    #[error("Network failure reaching the booking store: {0}")]
    Network(String),
    #[error("Local store I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed stored payload at {key}: {reason}")]
    Malformed { key: String, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
