use chrono::NaiveDateTime;
use cine_core::{ShowtimeKey, TOTAL_SEATS};

/// Minutes between now and the screening, fractional, negative once it started
pub fn minutes_until(key: &ShowtimeKey, now: NaiveDateTime) -> f64 {
    (key.instant() - now).num_seconds() as f64 / 60.0
}

/// Fraction of the auditorium already sold, by proximity to showtime.
///
/// Halls fill as the screening approaches: 30% early, up to 90% in the last
/// half hour.
pub fn reservation_density(minutes_until_show: f64) -> f64 {
    if minutes_until_show <= 30.0 {
        0.9
    } else if minutes_until_show <= 60.0 {
        0.7
    } else if minutes_until_show <= 180.0 {
        0.5
    } else {
        0.3
    }
}

/// Number of seats to mark reserved for the given density
pub fn reserved_target(density: f64) -> usize {
    ((TOTAL_SEATS as f64) * density).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_density_steps() {
        assert_eq!(reservation_density(10.0), 0.9);
        assert_eq!(reservation_density(30.0), 0.9);
        assert_eq!(reservation_density(30.5), 0.7);
        assert_eq!(reservation_density(60.0), 0.7);
        assert_eq!(reservation_density(61.0), 0.5);
        assert_eq!(reservation_density(180.0), 0.5);
        assert_eq!(reservation_density(181.0), 0.3);
        assert_eq!(reservation_density(1440.0), 0.3);
    }

    #[test]
    fn test_started_screening_counts_as_imminent() {
        assert_eq!(reservation_density(-15.0), 0.9);
    }

    #[test]
    fn test_targets_floor_the_grid_fraction() {
        assert_eq!(reserved_target(0.9), 280);
        assert_eq!(reserved_target(0.7), 218);
        assert_eq!(reserved_target(0.5), 156);
        assert_eq!(reserved_target(0.3), 93);
    }

    #[test]
    fn test_minutes_until_is_fractional() {
        let key = ShowtimeKey {
            movie_id: "m-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: "2:00 PM".parse().unwrap(),
        };
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(13, 29, 30)
            .unwrap();

        assert_eq!(minutes_until(&key, now), 30.5);
    }
}
