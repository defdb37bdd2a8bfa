//! Ticket categories and the per-category requests a customer submits.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The closed set of ticket categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Every category, in the order aggregation visits them.
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Whether a ticket of this category needs its own seat.
    ///
    /// Infants sit on an adult's lap: they are priced and count toward the
    /// transaction limits, but are not allocated a seat.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        };
        f.write_str(name)
    }
}

/// A request for `quantity` tickets of one category.
///
/// Requests come from untrusted input, so the category may be missing and the
/// quantity may be zero or negative. Validation happens in
/// [`RequestAggregator`](crate::aggregator::RequestAggregator), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    #[serde(default)]
    category: Option<TicketCategory>,
    quantity: i32,
}

impl TicketRequest {
    /// Creates a request. Accepts either a category or `None`.
    ///
    /// # Example
    /// ```
    /// use ticket_service::model::{TicketCategory, TicketRequest};
    ///
    /// let adults = TicketRequest::new(TicketCategory::Adult, 2);
    /// let unknown = TicketRequest::new(None, 1);
    /// assert_eq!(adults.category(), Some(TicketCategory::Adult));
    /// assert_eq!(unknown.category(), None);
    /// ```
    pub fn new(category: impl Into<Option<TicketCategory>>, quantity: i32) -> Self {
        Self {
            category: category.into(),
            quantity,
        }
    }

    pub fn adult(quantity: i32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    pub fn child(quantity: i32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    pub fn infant(quantity: i32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    pub fn category(&self) -> Option<TicketCategory> {
        self.category
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_infants_are_seat_exempt() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        assert_eq!(TicketCategory::Adult.to_string(), "ADULT");
        assert_eq!(TicketCategory::Infant.to_string(), "INFANT");
    }

    #[test]
    fn test_request_without_category_deserializes() {
        let request: TicketRequest = toml::from_str("quantity = 3").unwrap();
        assert_eq!(request.category(), None);
        assert_eq!(request.quantity(), 3);

        let request: TicketRequest = toml::from_str("category = \"CHILD\"\nquantity = -1").unwrap();
        assert_eq!(request, TicketRequest::child(-1));
    }
}
