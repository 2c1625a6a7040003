use crate::pipeline::{BookingPipeline, SubmissionError, SubmissionOutcome};
use chrono::NaiveDate;
use cine_core::{
    Booking, BookingStore, Clock, IdentityProvider, KvStore, MovieInfo, SeatId, ShowTiming,
    ShowtimeKey, StoreError,
};
use cine_seating::{load_or_generate, ReservedSeats, SeatSelection};
use cine_showtime::{available_timings, show_dates};
use std::sync::Arc;

/// Collaborator adapters the seat screen runs against
#[derive(Clone)]
pub struct SessionDeps {
    pub clock: Arc<dyn Clock>,
    pub identity: Arc<dyn IdentityProvider>,
    pub remote: Arc<dyn BookingStore>,
    pub local: Arc<dyn KvStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Date {0} is outside the booking window")]
    DateOutOfWindow(NaiveDate),

    #[error("Timing {0} is not offered on {1}")]
    TimingNotOffered(ShowTiming, NaiveDate),

    #[error("No seats selected")]
    EmptySelection,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// The seat-selection screen as a state machine.
///
/// Holds the 7-day window, the selected showtime, the reserved-seat map for
/// it, and the visitor's pending selection. Every state transition happens
/// on a discrete interaction event; changing the showtime discards the
/// selection and swaps in the seat map cached for the new key.
pub struct ScreeningSession {
    movie: MovieInfo,
    dates: Vec<NaiveDate>,
    selected_date: NaiveDate,
    selected_time: ShowTiming,
    reserved: ReservedSeats,
    selection: SeatSelection,
    pipeline: BookingPipeline,
    clock: Arc<dyn Clock>,
    identity: Arc<dyn IdentityProvider>,
    local: Arc<dyn KvStore>,
}

impl ScreeningSession {
    /// Open the screen for a movie: compute the date window, default to its
    /// first date and the first timing still open on it, and load that
    /// showtime's seat map.
    pub fn open(movie: MovieInfo, deps: SessionDeps) -> Result<Self, SessionError> {
        let now = deps.clock.now();
        let dates = show_dates(now, movie.release_date);
        let selected_date = dates[0];
        let selected_time = available_timings(selected_date, now)
            .into_iter()
            .next()
            .unwrap_or_else(|| ShowTiming::canonical()[0]);

        let mut session = Self {
            movie,
            dates,
            selected_date,
            selected_time,
            reserved: ReservedSeats::default(),
            selection: SeatSelection::new(),
            pipeline: BookingPipeline::new(deps.remote, deps.local.clone()),
            clock: deps.clock,
            identity: deps.identity,
            local: deps.local,
        };
        session.reload_reserved()?;
        Ok(session)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_time(&self) -> ShowTiming {
        self.selected_time
    }

    pub fn reserved(&self) -> &ReservedSeats {
        &self.reserved
    }

    pub fn selection(&self) -> &SeatSelection {
        &self.selection
    }

    pub fn showtime_key(&self) -> ShowtimeKey {
        ShowtimeKey {
            movie_id: self.movie.id.clone(),
            date: self.selected_date,
            time: self.selected_time,
        }
    }

    /// Timings still open for the selected date
    pub fn available_timings(&self) -> Vec<ShowTiming> {
        available_timings(self.selected_date, self.clock.now())
    }

    /// Whether the proceed action is enabled
    pub fn can_proceed(&self) -> bool {
        !self.selection.is_empty() && !self.pipeline.is_in_flight()
    }

    /// Pick a date from the window. Discards the selection, re-defaults the
    /// timing to the first one open on that date, and loads its seat map.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        if !self.dates.contains(&date) {
            return Err(SessionError::DateOutOfWindow(date));
        }

        self.selected_date = date;
        self.selection.clear();
        if let Some(first) = available_timings(date, self.clock.now()).into_iter().next() {
            self.selected_time = first;
        }
        self.reload_reserved()
    }

    /// Pick a timing offered on the selected date. Discards the selection
    /// and loads the seat map for the new key.
    pub fn select_time(&mut self, time: ShowTiming) -> Result<(), SessionError> {
        if !self.available_timings().contains(&time) {
            return Err(SessionError::TimingNotOffered(time, self.selected_date));
        }

        self.selected_time = time;
        self.selection.clear();
        self.reload_reserved()
    }

    /// Flip a seat; reserved seats never toggle
    pub fn toggle_seat(&mut self, seat: SeatId) {
        self.selection.toggle(seat, &self.reserved);
    }

    /// Submit the selection as a booking.
    ///
    /// Anonymous visitors are routed to the external sign-in flow with the
    /// selection intact; a completed submission (confirmed or fallback)
    /// clears it.
    pub async fn proceed(&mut self) -> Result<SubmissionOutcome, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let Some(user) = self.identity.current_user() else {
            self.identity.prompt_sign_in();
            return Ok(SubmissionOutcome::SignInRequired);
        };

        let booking = Booking::new(user.id, &self.movie, &self.showtime_key(), self.selection.seats());
        let outcome = self.pipeline.submit(booking).await?;
        self.selection.clear();
        Ok(outcome)
    }

    fn reload_reserved(&mut self) -> Result<(), SessionError> {
        let key = self.showtime_key();
        self.reserved = load_or_generate(
            self.local.as_ref(),
            &key,
            self.clock.now(),
            &mut rand::thread_rng(),
        )?;
        Ok(())
    }
}
