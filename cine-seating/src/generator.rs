use cine_core::{SeatId, HALF_BLOCK, ROWS, TOTAL_SEATS};
use rand::Rng;
use std::collections::BTreeSet;

/// Odds that a sampled party takes the adjacent right-hand seat too
const ADJACENT_PROBABILITY: f64 = 0.65;

/// Odds that a party of two grows to three with the left-hand neighbour
const LEFT_NEIGHBOUR_PROBABILITY: f64 = 0.5;

/// Seats unavailable for selection for one showtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedSeats(BTreeSet<SeatId>);

impl ReservedSeats {
    pub fn contains(&self, seat: &SeatId) -> bool {
        self.0.contains(seat)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatId> {
        self.0.iter()
    }

    fn insert(&mut self, seat: SeatId) {
        self.0.insert(seat);
    }
}

impl FromIterator<SeatId> for ReservedSeats {
    fn from_iter<I: IntoIterator<Item = SeatId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Draw a reserved-seat set of at least `target` seats.
///
/// Sampling models how halls actually fill: rows are triangularly weighted
/// toward the back (row L is 12x likelier than row A), seats land in the
/// left or right aisle block with equal odds, and most draws claim a pair
/// or triple of adjacent seats. The loop may overshoot the target by the
/// width of one party and stops as soon as the set is large enough.
pub fn generate<R: Rng>(rng: &mut R, target: usize) -> ReservedSeats {
    let target = target.min(TOTAL_SEATS);
    let mut seats = ReservedSeats::default();

    while seats.len() < target {
        let row = weighted_row_index(rng);
        let half_start: u8 = if rng.gen_bool(0.5) { 1 } else { HALF_BLOCK + 1 };
        let number = rng.gen_range(half_start..half_start + HALF_BLOCK);

        let Some(seat) = SeatId::at(row, number) else {
            continue;
        };

        if rng.gen_bool(ADJACENT_PROBABILITY) {
            seats.insert(seat);
            let half_end = half_start + HALF_BLOCK - 1;
            if number < half_end {
                if let Some(right) = SeatId::at(row, number + 1) {
                    seats.insert(right);
                }
            }
            if rng.gen_bool(LEFT_NEIGHBOUR_PROBABILITY) && number > 1 {
                if let Some(left) = SeatId::at(row, number - 1) {
                    seats.insert(left);
                }
            }
        } else {
            seats.insert(seat);
        }
    }

    seats
}

/// Triangular row weighting: row index i carries weight i + 1
fn weighted_row_index<R: Rng>(rng: &mut R) -> usize {
    let total: usize = (1..=ROWS.len()).sum();
    let mut roll = rng.gen_range(0..total);

    for index in 0..ROWS.len() {
        let weight = index + 1;
        if roll < weight {
            return index;
        }
        roll -= weight;
    }

    ROWS.len() - 1
}
