//! The purchase flow: account check, aggregation, pricing, payment, reservation.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
