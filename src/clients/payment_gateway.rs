//! # Payment Gateway
//!
//! The payment side of a purchase. A gateway either takes the full amount or
//! fails; the purchase flow inspects nothing beyond that.

use crate::model::AccountId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors a payment gateway can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The gateway refused the charge.
    #[error("Payment declined: {0}")]
    Declined(String),

    /// The gateway could not be reached or did not answer.
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Charges an account for a purchase.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Takes `amount` (minor currency units) from `account_id`.
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Development gateway that logs the charge and always succeeds.
#[derive(Clone, Debug, Default)]
pub struct LoggingPaymentGateway;

impl LoggingPaymentGateway {
    pub fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl PaymentGateway for LoggingPaymentGateway {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        info!(%account_id, amount, "Payment taken");
        Ok(())
    }
}
