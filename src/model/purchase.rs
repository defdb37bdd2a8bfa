//! Account identity and the shape of a purchase call.

use crate::model::{CategoryTotals, TicketRequest};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated, strictly positive account identifier.
///
/// The only way to obtain one is through
/// [`AccountId::parse`], so collaborators never see a raw, unchecked id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Accepts `Some(id)` with `id > 0`, rejecting anything else.
    ///
    /// On rejection the raw input is handed back so the caller can report it.
    pub fn parse(raw: Option<i64>) -> Result<Self, Option<i64>> {
        match raw {
            Some(id) if id > 0 => Ok(Self(id)),
            other => Err(other),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One purchase attempt as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseAttempt {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub requests: Vec<TicketRequest>,
}

impl PurchaseAttempt {
    pub fn new(account_id: impl Into<Option<i64>>, requests: Vec<TicketRequest>) -> Self {
        Self {
            account_id: account_id.into(),
            requests,
        }
    }
}

/// What a successful purchase charged and reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    pub totals: CategoryTotals,
    pub total_price: u64,
    pub total_seats: u64,
}
