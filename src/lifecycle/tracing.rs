//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the service with the
//! `tracing` crate. Every purchase runs inside a `purchase_tickets` span that
//! carries the raw account id and the number of requests, so each log line of
//! one purchase can be told apart from its neighbours.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from the
//! configured `log_level` (see [`ServiceConfig`](crate::config::ServiceConfig)).
//! Output uses the compact format without module paths.
//!
//! ## What Gets Traced
//!
//! - **Rejections** (`warn`): invalid account ids and rejected ticket requests,
//!   with the error message
//! - **Pricing** (`debug`): aggregated totals, price and seat count
//! - **Side effects** (`info`): payment taken, seats reserved
//! - **Collaborator failures** (`warn`): payment or reservation errors
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Include aggregated totals
//! RUST_LOG=debug cargo run
//!
//! # Only the purchase flow
//! RUST_LOG=ticket_service::purchase=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG purchase_tickets{account_id=Some(100) requests=2}: Requests aggregated totals=CategoryTotals { adult: 1, child: 1, infant: 0 }
//! DEBUG purchase_tickets{account_id=Some(100) requests=2}: Purchase priced total_price=40 total_seats=2
//!  INFO purchase_tickets{account_id=Some(100) requests=2}: Payment taken account_id=100 amount=40
//!  INFO purchase_tickets{account_id=Some(100) requests=2}: Payment complete total_price=40
//!  INFO purchase_tickets{account_id=Some(100) requests=2}: Seats reserved account_id=100 seats=2
//!  INFO purchase_tickets{account_id=Some(100) requests=2}: Reservation complete total_seats=2
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `default_level` is used only when `RUST_LOG` is unset or unparsable.
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
