use crate::generator::{generate, ReservedSeats};
use crate::occupancy::{minutes_until, reservation_density, reserved_target};
use chrono::NaiveDateTime;
use cine_core::{KvStore, SeatId, ShowtimeKey, StoreError, StoreResult};
use rand::Rng;

/// Reserved seats for one showtime: read from the durable cache, or generate
/// once and persist.
///
/// The cache makes generation idempotent per key: revisiting the same
/// showtime (including after a restart) reproduces the stored set instead of
/// re-rolling, while a different date or time gets an independent draw. A
/// malformed cache entry is discarded and regenerated.
pub fn load_or_generate<K, R>(
    kv: &K,
    key: &ShowtimeKey,
    now: NaiveDateTime,
    rng: &mut R,
) -> StoreResult<ReservedSeats>
where
    K: KvStore + ?Sized,
    R: Rng,
{
    let cache_key = key.cache_key();

    if let Some(raw) = kv.get(&cache_key)? {
        match decode(&raw) {
            Ok(seats) => return Ok(seats),
            Err(reason) => {
                tracing::warn!("Discarding malformed seat map cache {}: {}", cache_key, reason);
            }
        }
    }

    let density = reservation_density(minutes_until(key, now));
    let seats = generate(rng, reserved_target(density));
    kv.set(&cache_key, &encode(&cache_key, &seats)?)?;

    Ok(seats)
}

fn decode(raw: &str) -> Result<ReservedSeats, String> {
    let labels: Vec<String> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    labels
        .iter()
        .map(|label| label.parse::<SeatId>().map_err(|e| e.to_string()))
        .collect()
}

fn encode(cache_key: &str, seats: &ReservedSeats) -> StoreResult<String> {
    let labels: Vec<String> = seats.iter().map(|seat| seat.to_string()).collect();
    serde_json::to_string(&labels).map_err(|e| StoreError::Malformed {
        key: cache_key.to_string(),
        reason: e.to_string(),
    })
}
