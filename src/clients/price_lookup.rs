use crate::config::TicketPrices;
use crate::model::TicketCategory;

/// Source of unit prices.
///
/// Prices are non-negative integers in minor currency units. Lookup is used
/// only for pricing, never for validation.
pub trait PriceLookup: Send + Sync {
    fn unit_price(&self, category: TicketCategory) -> u32;
}

impl PriceLookup for TicketPrices {
    fn unit_price(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}
