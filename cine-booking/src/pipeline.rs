use crate::fallback::append_fallback_booking;
use cine_core::{Booking, BookingStore, KvStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// How a submission resolved.
///
/// `Confirmed` and `FallbackStored` both mean the visitor is done; the
/// distinction is kept so callers can choose to tell the user their booking
/// is device-local only.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The remote store accepted the booking
    Confirmed(Booking),
    /// The remote store failed; the booking is kept on-device
    FallbackStored(Booking),
    /// The visitor is anonymous; the external sign-in flow was opened instead
    SignInRequired,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("A submission is already in flight")]
    AlreadyInFlight,

    #[error("Fallback persistence failed: {0}")]
    Fallback(#[from] StoreError),
}

/// Remote-first, device-fallback booking persistence.
///
/// The remote call is attempted exactly once; any failure routes the booking
/// to the local log without surfacing an error. An atomic in-flight flag
/// rejects re-entrant submissions so a double-click cannot book twice.
pub struct BookingPipeline {
    remote: Arc<dyn BookingStore>,
    local: Arc<dyn KvStore>,
    in_flight: AtomicBool,
}

impl BookingPipeline {
    pub fn new(remote: Arc<dyn BookingStore>, local: Arc<dyn KvStore>) -> Self {
        Self {
            remote,
            local,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn submit(&self, booking: Booking) -> Result<SubmissionOutcome, SubmissionError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(SubmissionError::AlreadyInFlight);
        }

        let result = self.submit_inner(booking).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self, booking: Booking) -> Result<SubmissionOutcome, SubmissionError> {
        match self.remote.create(&booking).await {
            Ok(created) => {
                info!("Booking confirmed remotely: {}", created.booking_ref);
                Ok(SubmissionOutcome::Confirmed(created))
            }
            Err(err) => {
                warn!("Remote booking failed, keeping on device: {}", err);
                append_fallback_booking(self.local.as_ref(), &booking)?;
                Ok(SubmissionOutcome::FallbackStored(booking))
            }
        }
    }
}
