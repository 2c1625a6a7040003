pub mod cache;
pub mod generator;
pub mod occupancy;
pub mod selection;

pub use cache::load_or_generate;
pub use generator::{generate, ReservedSeats};
pub use occupancy::{minutes_until, reservation_density, reserved_target};
pub use selection::SeatSelection;
