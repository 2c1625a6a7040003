use cine_core::{Booking, KvStore, StoreError, StoreResult};

/// Durable-store key of the on-device booking log
pub const FALLBACK_BOOKINGS_KEY: &str = "bookings";

/// Append a booking to the device-local log.
///
/// Read-modify-write of the whole JSON array, not an atomic append; the
/// single-user device store has no concurrent writer. A malformed existing
/// log degrades to empty rather than blocking the submission.
pub fn append_fallback_booking<K: KvStore + ?Sized>(kv: &K, booking: &Booking) -> StoreResult<()> {
    let mut log = read_fallback_bookings(kv)?;
    log.push(booking.clone());

    let encoded = serde_json::to_string(&log).map_err(|e| StoreError::Malformed {
        key: FALLBACK_BOOKINGS_KEY.to_string(),
        reason: e.to_string(),
    })?;
    kv.set(FALLBACK_BOOKINGS_KEY, &encoded)
}

/// The current on-device booking log; missing or malformed reads as empty
pub fn read_fallback_bookings<K: KvStore + ?Sized>(kv: &K) -> StoreResult<Vec<Booking>> {
    match kv.get(FALLBACK_BOOKINGS_KEY)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(log) => Ok(log),
            Err(e) => {
                tracing::warn!("Discarding malformed local booking log: {}", e);
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cine_core::{MovieInfo, ShowtimeKey};
    use cine_store::MemoryStore;

    fn booking(seat: &str) -> Booking {
        let movie = MovieInfo {
            id: "m-1".to_string(),
            title: "Night Train".to_string(),
            duration: "2h 0m".to_string(),
            image: String::new(),
            release_date: None,
        };
        let key = ShowtimeKey {
            movie_id: "m-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            time: "6:30 PM".parse().unwrap(),
        };
        Booking::new("user-1".to_string(), &movie, &key, vec![seat.parse().unwrap()])
    }

    #[test]
    fn test_appends_accumulate() {
        let kv = MemoryStore::new();

        append_fallback_booking(&kv, &booking("A1")).unwrap();
        append_fallback_booking(&kv, &booking("B2")).unwrap();

        let log = read_fallback_bookings(&kv).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].seats[0].to_string(), "A1");
        assert_eq!(log[1].seats[0].to_string(), "B2");
    }

    #[test]
    fn test_malformed_log_degrades_to_empty() {
        let kv = MemoryStore::new();
        kv.set(FALLBACK_BOOKINGS_KEY, "not an array").unwrap();

        assert!(read_fallback_bookings(&kv).unwrap().is_empty());

        append_fallback_booking(&kv, &booking("A1")).unwrap();
        assert_eq!(read_fallback_bookings(&kv).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_log_reads_as_empty() {
        let kv = MemoryStore::new();
        assert!(read_fallback_bookings(&kv).unwrap().is_empty());
    }
}
