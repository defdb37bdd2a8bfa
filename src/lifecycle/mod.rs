//! # System Lifecycle
//!
//! Startup concerns that sit outside the purchase flow itself:
//!
//! - **Wiring**: [`TicketSystem`] turns a [`ServiceConfig`](crate::config::ServiceConfig)
//!   into a ready [`TicketService`](crate::purchase::TicketService)
//! - **Observability**: [`setup_tracing`] installs the log subscriber
//!
//! Production deployments replace the logging payment and reservation
//! collaborators through [`TicketSystem::with_collaborators`].

pub mod ticket_system;
pub mod tracing;

pub use ticket_system::*;
pub use tracing::*;
