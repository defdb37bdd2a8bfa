//! # Ticket Service Demo
//!
//! Runs a handful of purchase attempts through a [`TicketSystem`] wired with
//! the logging payment and reservation collaborators, and logs each outcome.
//!
//! Configuration is read from the TOML file named by `TICKETS_CONFIG` when
//! set, otherwise from `TICKETS_*` environment variables.

use ticket_service::config::{ConfigError, ServiceConfig};
use ticket_service::lifecycle::{setup_tracing, TicketSystem};
use ticket_service::model::{PurchaseAttempt, TicketRequest};
use tracing::{error, info, Instrument};

fn load_config() -> Result<ServiceConfig, ConfigError> {
    match std::env::var("TICKETS_CONFIG") {
        Ok(path) => ServiceConfig::load(path),
        Err(_) => ServiceConfig::from_env(),
    }
}

fn sample_attempts() -> Vec<PurchaseAttempt> {
    vec![
        PurchaseAttempt::new(100, vec![TicketRequest::adult(1), TicketRequest::child(1)]),
        PurchaseAttempt::new(
            101,
            vec![
                TicketRequest::adult(2),
                TicketRequest::child(2),
                TicketRequest::infant(1),
            ],
        ),
        PurchaseAttempt::new(102, vec![TicketRequest::child(3)]),
        PurchaseAttempt::new(103, vec![TicketRequest::adult(20), TicketRequest::infant(6)]),
        PurchaseAttempt::new(None, vec![TicketRequest::adult(1)]),
        PurchaseAttempt::new(104, vec![TicketRequest::new(None, 2)]),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = load_config().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!("Starting ticket service demo");
    let system = TicketSystem::new(config).map_err(|e| e.to_string())?;

    for (attempt_no, attempt) in sample_attempts().iter().enumerate() {
        let span = tracing::info_span!("attempt", attempt_no);
        let outcome = system.ticket_service.purchase(attempt).instrument(span).await;
        match outcome {
            Ok(summary) => info!(
                account_id = %summary.account_id,
                total_price = summary.total_price,
                total_seats = summary.total_seats,
                "Purchase complete"
            ),
            Err(e) => error!(error = %e, "Purchase rejected"),
        }
    }

    info!("Demo completed");
    Ok(())
}
