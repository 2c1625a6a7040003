use crate::seat::SeatId;
use crate::timing::ShowTiming;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat per-seat ticket price (rupees)
pub const SEAT_PRICE: u32 = 200;

/// Movie metadata supplied by the caller; the engine never fetches it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieInfo {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub image: String,
    pub release_date: Option<NaiveDate>,
}

/// Unique identifier of one bookable screening.
///
/// Seat maps are generated and cached per key; two different keys never
/// share reservation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowtimeKey {
    pub movie_id: String,
    pub date: NaiveDate,
    pub time: ShowTiming,
}

impl ShowtimeKey {
    /// Durable-store key for this screening's seat map
    pub fn cache_key(&self) -> String {
        format!("reservedSeats-{}-{}-{}", self.movie_id, self.date, self.time)
    }

    /// The screening as a single point in time
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.time.time())
    }
}

/// A submitted, priced seat reservation record.
///
/// Field names follow the booking store's JSON contract. `id` is assigned
/// by the remote store and only present on records read back from it;
/// `booking_ref` is generated client-side so a fallback-stored record stays
/// identifiable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub booking_ref: Uuid,
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub duration: String,
    pub image: String,
    pub date: NaiveDate,
    pub time: ShowTiming,
    pub seats: Vec<SeatId>,
    pub total_seats: u32,
    pub total_price: u32,
}

impl Booking {
    pub fn new(user_id: String, movie: &MovieInfo, key: &ShowtimeKey, seats: Vec<SeatId>) -> Self {
        let total_seats = seats.len() as u32;
        let duration = if movie.duration.is_empty() {
            "N/A".to_string()
        } else {
            movie.duration.clone()
        };

        Self {
            id: None,
            booking_ref: Uuid::new_v4(),
            user_id,
            movie_id: movie.id.clone(),
            title: movie.title.clone(),
            duration,
            image: movie.image.clone(),
            date: key.date,
            time: key.time,
            seats,
            total_seats,
            total_price: total_seats * SEAT_PRICE,
        }
    }
}
