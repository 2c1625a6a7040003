use crate::generator::ReservedSeats;
use cine_core::{SeatId, SEAT_PRICE};
use std::collections::BTreeSet;

/// Seats the visitor has toggled on, pending submission.
///
/// Reserved seats never enter the set; the screen clears it whenever the
/// showtime changes and after every submission.
#[derive(Debug, Clone, Default)]
pub struct SeatSelection {
    seats: BTreeSet<SeatId>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a seat in or out of the selection; reserved seats are ignored
    pub fn toggle(&mut self, seat: SeatId, reserved: &ReservedSeats) {
        if reserved.contains(&seat) {
            return;
        }
        if !self.seats.remove(&seat) {
            self.seats.insert(seat);
        }
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    pub fn contains(&self, seat: &SeatId) -> bool {
        self.seats.contains(seat)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Selected seats in reading order
    pub fn seats(&self) -> Vec<SeatId> {
        self.seats.iter().copied().collect()
    }

    pub fn total_price(&self) -> u32 {
        self.len() as u32 * SEAT_PRICE
    }
}
