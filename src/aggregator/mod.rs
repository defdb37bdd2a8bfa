//! # Request Aggregation
//!
//! Turns a list of [`TicketRequest`]s into [`CategoryTotals`], enforcing the
//! purchase rules on the way.
//!
//! ## Check order
//!
//! The checks always run in this order, so a given malformed input always
//! reports the same error:
//!
//! 1. Every request counted lies within `[min_per_transaction, max_per_transaction]`
//!    ([`PurchaseError::InvalidQuantity`]).
//! 2. The adult total reaches `min_adults` ([`PurchaseError::MissingAdult`]).
//! 3. The overall total lies within `[min_per_transaction, max_per_transaction]`
//!    ([`PurchaseError::TotalOutOfRange`]).
//!
//! A single request for 26 adults therefore fails on step 1, not step 3.
//!
//! Requests are visited category by category (see [`TicketCategory::ALL`]),
//! then in input order within a category.

use crate::config::PurchaseLimits;
use crate::model::{CategoryTotals, TicketCategory, TicketRequest};
use crate::purchase::PurchaseError;
use tracing::debug;

/// Validates ticket requests and sums them per category.
///
/// Stateless apart from its limits, so one instance can serve any number of
/// concurrent purchases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestAggregator {
    limits: PurchaseLimits,
}

impl RequestAggregator {
    pub fn new(limits: PurchaseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &PurchaseLimits {
        &self.limits
    }

    /// Fails with [`PurchaseError::MalformedRequest`] at the first request
    /// without a category. Quantities are not looked at.
    pub fn validate_categories(&self, requests: &[TicketRequest]) -> Result<(), PurchaseError> {
        match requests.iter().position(|r| r.category().is_none()) {
            Some(index) => Err(PurchaseError::MalformedRequest { index }),
            None => Ok(()),
        }
    }

    /// Sums requests per category and checks the quantity rules.
    ///
    /// Requests without a category are not counted; run
    /// [`validate_categories`](Self::validate_categories) first to reject them.
    ///
    /// # Example
    /// ```
    /// use ticket_service::aggregator::RequestAggregator;
    /// use ticket_service::model::TicketRequest;
    ///
    /// let aggregator = RequestAggregator::default();
    /// let totals = aggregator
    ///     .aggregate(&[TicketRequest::adult(2), TicketRequest::infant(1), TicketRequest::adult(1)])
    ///     .unwrap();
    /// assert_eq!(totals.adult, 3);
    /// assert_eq!(totals.child, 0);
    /// assert_eq!(totals.infant, 1);
    /// ```
    pub fn aggregate(&self, requests: &[TicketRequest]) -> Result<CategoryTotals, PurchaseError> {
        let mut totals = CategoryTotals::default();
        for category in TicketCategory::ALL {
            for request in requests.iter().filter(|r| r.category() == Some(category)) {
                let quantity = self.checked_quantity(category, request.quantity())?;
                totals.add(category, quantity);
            }
        }
        debug!(?totals, "Requests aggregated");

        let PurchaseLimits {
            max_per_transaction: max,
            min_per_transaction: min,
            min_adults,
        } = self.limits;

        if totals.adult < u64::from(min_adults) {
            return Err(PurchaseError::MissingAdult {
                adults: totals.adult,
                required: min_adults,
            });
        }

        let total = totals.total();
        if total < u64::from(min) || total > u64::from(max) {
            return Err(PurchaseError::TotalOutOfRange { total, min, max });
        }

        Ok(totals)
    }

    /// Returns the quantity as an unsigned count if it is within the
    /// per-request bounds.
    fn checked_quantity(&self, category: TicketCategory, quantity: i32) -> Result<u64, PurchaseError> {
        let PurchaseLimits {
            max_per_transaction: max,
            min_per_transaction: min,
            ..
        } = self.limits;
        let wide = i64::from(quantity);
        if wide < i64::from(min) || wide > i64::from(max) {
            return Err(PurchaseError::InvalidQuantity {
                category,
                quantity,
                min,
                max,
            });
        }
        // in range, so non-negative
        Ok(wide.unsigned_abs())
    }
}
