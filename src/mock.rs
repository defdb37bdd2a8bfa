//! # Mock Collaborators & Testing Guide
//!
//! [`MockCollaborators`] hands out test doubles for every collaborator the
//! purchase flow uses: price lookup, payment gateway and seat reservation. All
//! of them write into one shared call journal, so a test can assert not only
//! *what* was called but in *which order*.
//!
//! ## When to use Mocks vs the logging collaborators
//!
//! | Feature | MockCollaborators | Logging collaborators |
//! |---------|-------------------|-----------------------|
//! | **Call recording** | Every call, in order | Log lines only |
//! | **Error Injection** | Easy (`return_err`) | Never fails |
//! | **Expectations** | Checked by `verify()` | None |
//! | **Use Case** | Unit and integration tests | Demo binary, local runs |
//!
//! ## Example
//!
//! ```rust
//! use ticket_service::config::PurchaseLimits;
//! use ticket_service::mock::{CollaboratorCall, MockCollaborators};
//! use ticket_service::model::TicketRequest;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCollaborators::new();
//!     mock.expect_payment(100, 40).return_ok();
//!     mock.expect_reservation(100, 2).return_ok();
//!
//!     let service = mock.service(PurchaseLimits::default());
//!     service
//!         .purchase_tickets(Some(100), &[TicketRequest::adult(1), TicketRequest::child(1)])
//!         .await
//!         .unwrap();
//!
//!     mock.verify();
//!     assert_eq!(
//!         mock.side_effects(),
//!         vec![
//!             CollaboratorCall::Payment { account_id: 100, amount: 40 },
//!             CollaboratorCall::Reservation { account_id: 100, seats: 2 },
//!         ]
//!     );
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! Collaborator failures are hard to provoke against real services. With the
//! mock, queue an error instead:
//!
//! ```rust
//! use ticket_service::clients::PaymentError;
//! use ticket_service::config::PurchaseLimits;
//! use ticket_service::mock::MockCollaborators;
//! use ticket_service::model::TicketRequest;
//! use ticket_service::purchase::PurchaseError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCollaborators::new();
//!     mock.expect_payment(7, 25)
//!         .return_err(PaymentError::Declined("insufficient funds".into()));
//!
//!     let result = mock
//!         .service(PurchaseLimits::default())
//!         .purchase_tickets(Some(7), &[TicketRequest::adult(1)])
//!         .await;
//!
//!     assert!(matches!(result, Err(PurchaseError::PaymentFailed(_))));
//!     mock.verify(); // no reservation was expected, and none was made
//! }
//! ```

use crate::clients::{
    PaymentError, PaymentGateway, PriceLookup, ReservationError, SeatReservation,
};
use crate::config::{PurchaseLimits, TicketPrices};
use crate::model::{AccountId, TicketCategory};
use crate::purchase::TicketService;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A call made to one of the mock collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorCall {
    PriceLookup { category: TicketCategory },
    Payment { account_id: i64, amount: u64 },
    Reservation { account_id: i64, seats: u64 },
}

/// An expected side effect and the answer to give when it arrives.
enum Expectation {
    Payment {
        account_id: i64,
        amount: u64,
        response: Result<(), PaymentError>,
    },
    Reservation {
        account_id: i64,
        seats: u64,
        response: Result<(), ReservationError>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    journal: Vec<CollaboratorCall>,
    mismatches: Vec<String>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared state behind a family of mock collaborators.
///
/// Payment and reservation calls are matched against the queued expectations
/// in order. A call that does not match the next expectation is answered with
/// an `Unavailable` error and reported by [`verify`](Self::verify).
/// Price lookups are recorded but never need an expectation.
#[derive(Clone)]
pub struct MockCollaborators {
    prices: TicketPrices,
    state: Arc<Mutex<MockState>>,
}

impl Default for MockCollaborators {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCollaborators {
    /// Creates mocks priced with [`TicketPrices::default`] and no expectations.
    pub fn new() -> Self {
        Self::with_prices(TicketPrices::default())
    }

    pub fn with_prices(prices: TicketPrices) -> Self {
        Self {
            prices,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn price_lookup(&self) -> Arc<dyn PriceLookup> {
        Arc::new(MockPriceLookup { mock: self.clone() })
    }

    pub fn payment_gateway(&self) -> Arc<dyn PaymentGateway> {
        Arc::new(MockPaymentGateway { mock: self.clone() })
    }

    pub fn seat_reservation(&self) -> Arc<dyn SeatReservation> {
        Arc::new(MockSeatReservation { mock: self.clone() })
    }

    /// A [`TicketService`] wired entirely to these mocks.
    pub fn service(&self, limits: PurchaseLimits) -> TicketService {
        TicketService::new(
            limits,
            self.price_lookup(),
            self.payment_gateway(),
            self.seat_reservation(),
        )
    }

    /// Expects a `make_payment(account_id, amount)` call.
    pub fn expect_payment(&self, account_id: i64, amount: u64) -> PaymentExpectationBuilder {
        PaymentExpectationBuilder {
            account_id,
            amount,
            state: self.state.clone(),
        }
    }

    /// Expects a `reserve_seats(account_id, seats)` call.
    pub fn expect_reservation(&self, account_id: i64, seats: u64) -> ReservationExpectationBuilder {
        ReservationExpectationBuilder {
            account_id,
            seats,
            state: self.state.clone(),
        }
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        lock(&self.state).journal.clone()
    }

    /// Recorded payment and reservation calls, in order.
    pub fn side_effects(&self) -> Vec<CollaboratorCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, CollaboratorCall::PriceLookup { .. }))
            .collect()
    }

    /// Panics unless every expectation was met and no unexpected call was made.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Unexpected collaborator calls: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn record(&self, call: CollaboratorCall) {
        lock(&self.state).journal.push(call);
    }

    fn answer_payment(&self, account_id: i64, amount: u64) -> Result<(), PaymentError> {
        let mut state = lock(&self.state);
        state.journal.push(CollaboratorCall::Payment { account_id, amount });
        match state.expectations.pop_front() {
            Some(Expectation::Payment {
                account_id: want_account,
                amount: want_amount,
                response,
            }) if want_account == account_id && want_amount == amount => response,
            other => {
                let message = format!(
                    "payment({account_id}, {amount}) while expecting {}",
                    describe(other.as_ref())
                );
                state.mismatches.push(message.clone());
                Err(PaymentError::Unavailable(message))
            }
        }
    }

    fn answer_reservation(&self, account_id: i64, seats: u64) -> Result<(), ReservationError> {
        let mut state = lock(&self.state);
        state.journal.push(CollaboratorCall::Reservation { account_id, seats });
        match state.expectations.pop_front() {
            Some(Expectation::Reservation {
                account_id: want_account,
                seats: want_seats,
                response,
            }) if want_account == account_id && want_seats == seats => response,
            other => {
                let message = format!(
                    "reservation({account_id}, {seats}) while expecting {}",
                    describe(other.as_ref())
                );
                state.mismatches.push(message.clone());
                Err(ReservationError::Unavailable(message))
            }
        }
    }
}

fn describe(expectation: Option<&Expectation>) -> String {
    match expectation {
        None => "nothing".to_string(),
        Some(Expectation::Payment {
            account_id, amount, ..
        }) => format!("payment({account_id}, {amount})"),
        Some(Expectation::Reservation {
            account_id, seats, ..
        }) => format!("reservation({account_id}, {seats})"),
    }
}

/// Builder for payment expectations.
pub struct PaymentExpectationBuilder {
    account_id: i64,
    amount: u64,
    state: Arc<Mutex<MockState>>,
}

impl PaymentExpectationBuilder {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: PaymentError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), PaymentError>) {
        lock(&self.state).expectations.push_back(Expectation::Payment {
            account_id: self.account_id,
            amount: self.amount,
            response,
        });
    }
}

/// Builder for reservation expectations.
pub struct ReservationExpectationBuilder {
    account_id: i64,
    seats: u64,
    state: Arc<Mutex<MockState>>,
}

impl ReservationExpectationBuilder {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: ReservationError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), ReservationError>) {
        lock(&self.state).expectations.push_back(Expectation::Reservation {
            account_id: self.account_id,
            seats: self.seats,
            response,
        });
    }
}

/// Price table that records every lookup.
pub struct MockPriceLookup {
    mock: MockCollaborators,
}

impl PriceLookup for MockPriceLookup {
    fn unit_price(&self, category: TicketCategory) -> u32 {
        self.mock.record(CollaboratorCall::PriceLookup { category });
        self.mock.prices.unit_price(category)
    }
}

pub struct MockPaymentGateway {
    mock: MockCollaborators,
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        self.mock.answer_payment(account_id.get(), amount)
    }
}

pub struct MockSeatReservation {
    mock: MockCollaborators,
}

#[async_trait]
impl SeatReservation for MockSeatReservation {
    async fn reserve_seats(&self, account_id: AccountId, seats: u64) -> Result<(), ReservationError> {
        self.mock.answer_reservation(account_id.get(), seats)
    }
}
