//! Pure data structures describing a ticket purchase.
//!
//! Nothing here is persisted: every value is built for a single purchase call
//! and dropped when it returns.

pub mod purchase;
pub mod ticket;
pub mod totals;

pub use purchase::*;
pub use ticket::*;
pub use totals::*;
