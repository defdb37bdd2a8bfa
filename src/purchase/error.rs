//! Error types for ticket purchases.

use crate::clients::{PaymentError, ReservationError};
use crate::model::TicketCategory;
use thiserror::Error;

/// Errors that can abort a ticket purchase.
///
/// Every validation variant carries the offending value and the bounds it was
/// checked against, and its message embeds them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PurchaseError {
    /// The account id was absent or not strictly positive.
    #[error("Account id {} is invalid", account_label(.0))]
    InvalidAccount(Option<i64>),

    /// A ticket request did not name a category.
    #[error("Ticket request at position {index} has no ticket category")]
    MalformedRequest { index: usize },

    /// A single request asked for a quantity outside the per-transaction bounds.
    #[error("Number of tickets requested is {quantity}, but needs to be between {min} and {max}")]
    InvalidQuantity {
        category: TicketCategory,
        quantity: i32,
        min: u32,
        max: u32,
    },

    /// Too few adult tickets to accompany the rest of the party.
    #[error("Ticket request contains {adults} adult tickets, requires at least {required}")]
    MissingAdult { adults: u64, required: u32 },

    /// The aggregated number of tickets is outside the per-transaction bounds.
    #[error("Total number of tickets requested is {total}, but needs to be between {min} and {max}")]
    TotalOutOfRange { total: u64, min: u32, max: u32 },

    /// The payment collaborator refused or failed.
    #[error("Payment failed: {0}")]
    PaymentFailed(#[from] PaymentError),

    /// The seat reservation collaborator refused or failed.
    #[error("Seat reservation failed: {0}")]
    ReservationFailed(#[from] ReservationError),
}

impl PurchaseError {
    /// True for the variants produced before any collaborator is called.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::PaymentFailed(_) | Self::ReservationFailed(_))
    }
}

fn account_label(raw: &Option<i64>) -> String {
    match raw {
        Some(id) => id.to_string(),
        None => "null".to_string(),
    }
}
