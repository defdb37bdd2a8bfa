//! Narrow interfaces to the services a purchase depends on.
//!
//! The purchase flow never talks to a price source, a payment gateway or a
//! seat booking system directly; it goes through these traits so production
//! adapters and the test doubles in [`crate::mock`] are interchangeable.

pub mod payment_gateway;
pub mod price_lookup;
pub mod seat_reservation;

pub use payment_gateway::*;
pub use price_lookup::*;
pub use seat_reservation::*;
