use std::sync::Arc;

use cine_booking::{ScreeningSession, SessionDeps, SubmissionOutcome};
use cine_core::{MovieInfo, SeatId, StaticIdentity, SystemClock};
use cine_store::{Config, FileStore, HttpBookingStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cine_app=debug,cine_booking=debug,cine_seating=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Booking against {}", config.api.base_url);

    let identity = match config.identity.user_id.clone() {
        Some(id) => StaticIdentity::signed_in(id),
        None => StaticIdentity::signed_out(),
    };

    let deps = SessionDeps {
        clock: Arc::new(SystemClock),
        identity: Arc::new(identity),
        remote: Arc::new(HttpBookingStore::new(config.api.base_url.as_str())),
        local: Arc::new(FileStore::new(config.storage.path.as_str())),
    };

    // Walk the booking flow once against the configured backend
    let movie = MovieInfo {
        id: "default".to_string(),
        title: "Untitled Movie".to_string(),
        duration: "2h 0m".to_string(),
        image: String::new(),
        release_date: None,
    };

    let mut session = ScreeningSession::open(movie, deps).expect("Failed to open seat screen");

    tracing::info!(
        "Window {} .. {} | {} at {}",
        session.dates()[0],
        session.dates()[session.dates().len() - 1],
        session.selected_date(),
        session.selected_time()
    );
    tracing::info!(
        "{} of 312 seats already reserved; timings open: {:?}",
        session.reserved().len(),
        session
            .available_timings()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
    );

    for seat in first_free_seats(&session, 2) {
        session.toggle_seat(seat);
    }
    tracing::info!(
        "Selected {:?} for a total of {}",
        session.selection().seats().iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        session.selection().total_price()
    );

    match session.proceed().await {
        Ok(SubmissionOutcome::Confirmed(booking)) => {
            tracing::info!("Booking confirmed remotely: {}", booking.booking_ref);
        }
        Ok(SubmissionOutcome::FallbackStored(booking)) => {
            tracing::info!("Backend unreachable; booking kept on device: {}", booking.booking_ref);
        }
        Ok(SubmissionOutcome::SignInRequired) => {
            tracing::info!("Sign in first (set CINE__IDENTITY__USER_ID), selection kept");
        }
        Err(e) => tracing::error!("Submission failed: {}", e),
    }
}

fn first_free_seats(session: &ScreeningSession, count: usize) -> Vec<SeatId> {
    let mut free = Vec::new();
    for row_index in 0..12 {
        for number in 1..=26 {
            if let Some(seat) = SeatId::at(row_index, number) {
                if !session.reserved().contains(&seat) {
                    free.push(seat);
                    if free.len() == count {
                        return free;
                    }
                }
            }
        }
    }
    free
}
