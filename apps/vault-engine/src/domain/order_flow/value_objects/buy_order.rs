//! The vault-initiated put purchase order.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::order_window::OrderWindow;
use crate::domain::shared::{Amount, Timestamp};

/// An open intent to purchase put options sized to a deposit.
///
/// Activity is modeled by the `Option<BuyOrder>` slot on the vault aggregate:
/// a value of this type is an active order by construction, and the stale
/// fields of a deactivated order can never be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrder {
    /// Quote-asset units reserved for the purchase.
    underlying_amount: Amount,
    /// Acceptable strike/expiry window for offered contracts.
    window: OrderWindow,
    /// When the order was activated.
    created_at: Timestamp,
}

impl BuyOrder {
    /// Create a new active buy order.
    #[must_use]
    pub const fn new(underlying_amount: Amount, window: OrderWindow, created_at: Timestamp) -> Self {
        Self {
            underlying_amount,
            window,
            created_at,
        }
    }

    /// Quote-asset units reserved for the purchase.
    #[must_use]
    pub const fn underlying_amount(&self) -> Amount {
        self.underlying_amount
    }

    /// Acceptable strike/expiry window.
    #[must_use]
    pub const fn window(&self) -> &OrderWindow {
        &self.window
    }

    /// When the order was activated.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whether the order has outlived `max_active` as of `now`.
    ///
    /// A stale order may be cancelled by any caller, not just the broker.
    #[must_use]
    pub fn is_stale(&self, now: Timestamp, max_active: Duration) -> bool {
        now >= self.created_at.plus(max_active)
    }
}
