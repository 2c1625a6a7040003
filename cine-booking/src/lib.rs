pub mod fallback;
pub mod pipeline;
pub mod session;

pub use fallback::{append_fallback_booking, read_fallback_bookings, FALLBACK_BOOKINGS_KEY};
pub use pipeline::{BookingPipeline, SubmissionError, SubmissionOutcome};
pub use session::{ScreeningSession, SessionDeps, SessionError};
