//! # Seat Reservation
//!
//! The booking side of a purchase, called only after payment has gone through.

use crate::model::AccountId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors a seat reservation system can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Not enough seats available: requested {requested}")]
    SoldOut { requested: u64 },

    #[error("Seat reservation service unavailable: {0}")]
    Unavailable(String),
}

/// Reserves seats for an account.
#[async_trait]
pub trait SeatReservation: Send + Sync {
    async fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError>;
}

/// Development reservation system that logs the booking and always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingSeatReservation;

impl LoggingSeatReservation {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> Arc<dyn SeatReservation> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl SeatReservation for LoggingSeatReservation {
    async fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError> {
        info!(%account_id, seats, "Seats reserved");
        Ok(())
    }
}
