//! # Ticket Service
//!
//! > **Validate, aggregate, price and book a batch of ticket requests.**
//!
//! A customer asks for tickets as a list of `(category, quantity)` requests.
//! This crate decides whether that batch may be bought, turns it into
//! per-category totals, prices it, and then hands payment and seat booking to
//! external services, in that order and exactly once each.
//!
//! ## 🏗️ Design Philosophy
//!
//! Only the rules are owned here. Prices, payments and seat booking belong to
//! other systems and are reached through narrow traits, so the rules can be
//! tested against in-memory doubles and deployed against real services
//! without change.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Rules ([`aggregator`])
//! - **Role**: Rejects malformed batches and sums the rest per category.
//! - **Key items**: [`RequestAggregator`](aggregator::RequestAggregator).
//!
//! ### 2. The Flow ([`purchase`])
//! - **Role**: Account check, aggregation, pricing, payment, reservation.
//! - **Key items**: [`TicketService`](purchase::TicketService), [`PurchaseError`](purchase::PurchaseError).
//!
//! ### 3. The Interfaces ([`clients`])
//! - **Role**: The traits the flow calls out through, plus development stand-ins.
//! - **Key items**: [`PriceLookup`](clients::PriceLookup), [`PaymentGateway`](clients::PaymentGateway),
//!   [`SeatReservation`](clients::SeatReservation).
//!
//! ### 4. The Data ([`model`])
//! - **Key items**: [`TicketRequest`](model::TicketRequest), [`CategoryTotals`](model::CategoryTotals),
//!   [`PurchaseSummary`](model::PurchaseSummary).
//!
//! ### 5. Startup ([`config`], [`lifecycle`])
//! - **Role**: Limits and prices from TOML or the environment; wiring and logging.
//!
//! ## 🧪 Testing
//!
//! See the [`mock`] module for recording collaborators with expectations.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! TICKETS_CONFIG=tickets.toml cargo run
//! ```

pub mod aggregator;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod purchase;
