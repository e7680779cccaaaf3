//! The liquidator-initiated disposal order.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Amount, AssetId, Timestamp};

/// An open intent to dispose of part of a held option position.
///
/// Like [`super::BuyOrder`], activity is modeled by the aggregate's
/// `Option<SellOrder>` slot. The referenced option must be a current ledger
/// member for as long as the order is active; the sweep deactivates the order
/// when it settles that position away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrder {
    /// The option series being sold.
    option: AssetId,
    /// Option-token quantity offered for sale.
    amount: Amount,
    /// When the order was activated.
    created_at: Timestamp,
}

impl SellOrder {
    /// Create a new active sell order.
    #[must_use]
    pub const fn new(option: AssetId, amount: Amount, created_at: Timestamp) -> Self {
        Self {
            option,
            amount,
            created_at,
        }
    }

    /// The option series being sold.
    #[must_use]
    pub const fn option(&self) -> &AssetId {
        &self.option
    }

    /// Option-token quantity offered for sale.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// When the order was activated.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whether the order has outlived `max_active` as of `now`.
    #[must_use]
    pub fn is_stale(&self, now: Timestamp, max_active: Duration) -> bool {
        now >= self.created_at.plus(max_active)
    }
}
