use chrono::{Duration, NaiveDate, NaiveDateTime};
use cine_core::ShowTiming;

/// Number of consecutive days offered for booking
pub const BOOKING_WINDOW_DAYS: usize = 7;

/// The bookable date window: 7 consecutive days starting at the later of
/// today and the movie's release date.
pub fn show_dates(now: NaiveDateTime, release_date: Option<NaiveDate>) -> Vec<NaiveDate> {
    let today = now.date();
    let first = release_date.filter(|release| *release > today).unwrap_or(today);

    (0..BOOKING_WINDOW_DAYS as i64)
        .map(|offset| first + Duration::days(offset))
        .collect()
}

/// Timings still open for booking on the given date.
///
/// Today keeps only timings strictly after the current wall-clock time, in
/// schedule order; any other date keeps the full schedule. An exhausted day
/// falls back to the first canonical timing so the caller never sees an
/// empty list.
pub fn available_timings(date: NaiveDate, now: NaiveDateTime) -> Vec<ShowTiming> {
    let schedule = ShowTiming::canonical();
    let open: Vec<ShowTiming> = schedule
        .iter()
        .copied()
        .filter(|timing| date != now.date() || timing.time() > now.time())
        .collect();

    if open.is_empty() {
        vec![schedule[0]]
    } else {
        open
    }
}
