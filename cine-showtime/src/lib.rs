pub mod provider;

pub use provider::{available_timings, show_dates, BOOKING_WINDOW_DAYS};
