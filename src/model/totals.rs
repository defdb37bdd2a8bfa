use crate::model::TicketCategory;
use serde::Serialize;

/// Aggregated ticket counts, one field per [`TicketCategory`].
///
/// Categories absent from the input are simply zero, so there is no missing-key
/// case to handle. Counts are 64-bit so that summing any number of 32-bit
/// requests cannot wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl CategoryTotals {
    pub fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    pub(crate) fn add(&mut self, category: TicketCategory, quantity: u64) {
        let slot = match category {
            TicketCategory::Adult => &mut self.adult,
            TicketCategory::Child => &mut self.child,
            TicketCategory::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(quantity);
    }

    /// `(category, count)` pairs in [`TicketCategory::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, u64)> + '_ {
        TicketCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Total number of tickets across all categories.
    pub fn total(&self) -> u64 {
        self.iter().fold(0u64, |acc, (_, n)| acc.saturating_add(n))
    }

    /// Number of seats the tickets need (infants excluded).
    pub fn seats(&self) -> u64 {
        self.iter()
            .filter(|(c, _)| c.occupies_seat())
            .fold(0u64, |acc, (_, n)| acc.saturating_add(n))
    }
}
