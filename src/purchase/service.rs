use crate::aggregator::RequestAggregator;
use crate::clients::{PaymentGateway, PriceLookup, SeatReservation};
use crate::config::PurchaseLimits;
use crate::model::{AccountId, CategoryTotals, PurchaseAttempt, PurchaseSummary, TicketRequest};
use crate::purchase::PurchaseError;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Runs ticket purchases against injected collaborators.
///
/// Each call is an independent, strictly sequential flow:
///
/// 1. validate the account id,
/// 2. validate categories, then aggregate (see [`RequestAggregator`]),
/// 3. price the totals and count the seats,
/// 4. take payment, exactly once,
/// 5. reserve seats, exactly once, after payment has returned.
///
/// Any failure stops the flow where it happened. Validation failures happen
/// before any collaborator is called; a failed payment means no reservation
/// is attempted. Nothing is retried.
///
/// The service holds no per-call state, so clones can be shared freely between
/// tasks serving different accounts.
#[derive(Clone)]
pub struct TicketService {
    aggregator: RequestAggregator,
    prices: Arc<dyn PriceLookup>,
    payments: Arc<dyn PaymentGateway>,
    seats: Arc<dyn SeatReservation>,
}

impl TicketService {
    pub fn new(
        limits: PurchaseLimits,
        prices: Arc<dyn PriceLookup>,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservation>,
    ) -> Self {
        Self {
            aggregator: RequestAggregator::new(limits),
            prices,
            payments,
            seats,
        }
    }

    pub fn aggregator(&self) -> &RequestAggregator {
        &self.aggregator
    }

    /// Validates, prices and books `requests` for `account_id`.
    ///
    /// An absent `account_id` fails with [`PurchaseError::InvalidAccount`] like
    /// any other non-positive id.
    #[instrument(skip(self, requests), fields(requests = requests.len()))]
    pub async fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let account_id = AccountId::parse(account_id).map_err(|raw| {
            warn!(?raw, "Rejected account id");
            PurchaseError::InvalidAccount(raw)
        })?;

        let totals = self
            .aggregator
            .validate_categories(requests)
            .and_then(|()| self.aggregator.aggregate(requests))
            .inspect_err(|e| warn!(error = %e, "Rejected ticket requests"))?;

        let total_price = total_price(&totals, self.prices.as_ref());
        let total_seats = totals.seats();
        debug!(total_price, total_seats, "Purchase priced");

        self.payments
            .make_payment(account_id, total_price)
            .await
            .inspect_err(|e| warn!(error = %e, "Payment failed"))?;
        info!(total_price, "Payment complete");

        self.seats
            .reserve_seats(account_id, total_seats)
            .await
            .inspect_err(|e| warn!(error = %e, "Seat reservation failed"))?;
        info!(total_seats, "Reservation complete");

        Ok(PurchaseSummary {
            account_id,
            totals,
            total_price,
            total_seats,
        })
    }

    /// Runs a whole [`PurchaseAttempt`].
    pub async fn purchase(&self, attempt: &PurchaseAttempt) -> Result<PurchaseSummary, PurchaseError> {
        self.purchase_tickets(attempt.account_id, &attempt.requests).await
    }
}

/// `Σ unit_price(c) * count(c)` over every category.
pub fn total_price(totals: &CategoryTotals, prices: &dyn PriceLookup) -> u64 {
    totals.iter().fold(0u64, |acc, (category, count)| {
        let line = u64::from(prices.unit_price(category)).saturating_mul(count);
        acc.saturating_add(line)
    })
}
