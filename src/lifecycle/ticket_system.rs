use crate::clients::{LoggingPaymentGateway, LoggingSeatReservation, PaymentGateway, SeatReservation};
use crate::config::{ConfigError, ServiceConfig};
use crate::purchase::TicketService;
use std::sync::Arc;
use tracing::info;

/// Wires a [`TicketService`] from configuration.
///
/// `TicketSystem` is responsible for:
/// - **Validation**: refusing limits under which no purchase could succeed
/// - **Dependency Wiring**: the configured price table plus payment and
///   reservation collaborators
///
/// # Example
///
/// ```
/// use ticket_service::config::ServiceConfig;
/// use ticket_service::lifecycle::TicketSystem;
/// use ticket_service::model::TicketRequest;
///
/// # #[tokio::main]
/// # async fn main() {
/// let system = TicketSystem::new(ServiceConfig::default()).unwrap();
/// let summary = system
///     .ticket_service
///     .purchase_tickets(Some(1), &[TicketRequest::adult(2)])
///     .await
///     .unwrap();
/// assert_eq!(summary.total_price, 50);
/// # }
/// ```
pub struct TicketSystem {
    /// The purchase entry point
    pub ticket_service: TicketService,

    config: ServiceConfig,
}

impl TicketSystem {
    /// Builds the system with the logging payment and reservation collaborators.
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        Self::with_collaborators(
            config,
            LoggingPaymentGateway::shared(),
            LoggingSeatReservation::shared(),
        )
    }

    /// Builds the system around caller-supplied payment and reservation services.
    pub fn with_collaborators(
        config: ServiceConfig,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservation>,
    ) -> Result<Self, ConfigError> {
        config.limits.validate()?;

        let ticket_service =
            TicketService::new(config.limits, Arc::new(config.prices), payments, seats);

        info!(
            max_per_transaction = config.limits.max_per_transaction,
            min_per_transaction = config.limits.min_per_transaction,
            min_adults = config.limits.min_adults,
            "Ticket system ready"
        );

        Ok(Self {
            ticket_service,
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
