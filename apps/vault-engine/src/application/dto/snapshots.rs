//! Serializable snapshots of vault state for external monitors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_flow::value_objects::{BuyOrder, SellOrder, VaultConfig};
use crate::domain::order_flow::Vault;
use crate::domain::position::Position;
use crate::domain::shared::{Amount, AssetId, Price, Timestamp};

/// Snapshot of an active buy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrderSnapshot {
    /// Quote-asset units reserved for the purchase.
    pub underlying_amount: Amount,
    /// Lower strike bound.
    pub min_strike: Price,
    /// Upper strike bound.
    pub max_strike: Price,
    /// Earliest acceptable expiry.
    pub min_expiry: Timestamp,
    /// Latest acceptable expiry.
    pub max_expiry: Timestamp,
    /// When the order was activated.
    pub created_at: Timestamp,
}

impl From<&BuyOrder> for BuyOrderSnapshot {
    fn from(order: &BuyOrder) -> Self {
        let window = order.window();
        Self {
            underlying_amount: order.underlying_amount(),
            min_strike: window.min_strike(),
            max_strike: window.max_strike(),
            min_expiry: window.min_expiry(),
            max_expiry: window.max_expiry(),
            created_at: order.created_at(),
        }
    }
}

/// Snapshot of an active sell order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrderSnapshot {
    /// The option series offered for sale.
    pub option: AssetId,
    /// Option-token quantity offered.
    pub amount: Amount,
    /// When the order was activated.
    pub created_at: Timestamp,
}

impl From<&SellOrder> for SellOrderSnapshot {
    fn from(order: &SellOrder) -> Self {
        Self {
            option: order.option().clone(),
            amount: order.amount(),
            created_at: order.created_at(),
        }
    }
}

/// Snapshot of one held position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// The option series held.
    pub option: AssetId,
    /// Strike price of the series.
    pub strike: Price,
    /// Expiry of the series.
    pub expiry: Timestamp,
    /// Option-token balance held.
    pub balance: Amount,
    /// When the position was acquired.
    pub acquired_at: Timestamp,
}

impl From<&Position> for PositionSnapshot {
    fn from(position: &Position) -> Self {
        Self {
            option: position.contract().series().clone(),
            strike: position.contract().strike(),
            expiry: position.contract().expiry(),
            balance: position.balance(),
            acquired_at: position.acquired_at(),
        }
    }
}

/// Snapshot of the current configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfigSnapshot {
    /// Lower strike bound as a fraction of spot.
    pub strike_multiplier_min: Decimal,
    /// Upper strike bound as a fraction of spot.
    pub strike_multiplier_max: Decimal,
    /// Minimum time-to-expiry, in seconds.
    pub expiry_delta_min_secs: i64,
    /// Maximum time-to-expiry, in seconds.
    pub expiry_delta_max_secs: i64,
    /// Premium ratio applied to order sizing.
    pub option_premium_ratio: Decimal,
    /// Price ratio applied to in-the-money marks.
    pub itm_option_price_ratio: Decimal,
    /// Premium discount applied to sizing.
    pub option_premium_discount: Decimal,
    /// Minimum deposit value that triggers auto-order creation.
    pub min_chunk_value: Amount,
    /// Stale-order cancellation timeout, in seconds.
    pub max_order_active_secs: i64,
}

impl From<&VaultConfig> for VaultConfigSnapshot {
    fn from(config: &VaultConfig) -> Self {
        Self {
            strike_multiplier_min: config.strike_multiplier_min(),
            strike_multiplier_max: config.strike_multiplier_max(),
            expiry_delta_min_secs: config.expiry_delta_min().num_seconds(),
            expiry_delta_max_secs: config.expiry_delta_max().num_seconds(),
            option_premium_ratio: config.option_premium_ratio(),
            itm_option_price_ratio: config.itm_option_price_ratio(),
            option_premium_discount: config.option_premium_discount(),
            min_chunk_value: config.min_chunk_value(),
            max_order_active_secs: config.max_order_active().num_seconds(),
        }
    }
}

/// Combined snapshot of the externally observable vault state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSnapshot {
    /// Active buy order, if any.
    pub buy_order: Option<BuyOrderSnapshot>,
    /// Active sell order, if any.
    pub sell_order: Option<SellOrderSnapshot>,
    /// Open positions in insertion order.
    pub positions: Vec<PositionSnapshot>,
    /// Current configuration.
    pub config: VaultConfigSnapshot,
}

impl VaultSnapshot {
    /// Capture the externally observable state of `vault`.
    #[must_use]
    pub fn capture(vault: &Vault) -> Self {
        Self {
            buy_order: vault.buy_order().map(BuyOrderSnapshot::from),
            sell_order: vault.sell_order().map(SellOrderSnapshot::from),
            positions: vault.positions().iter().map(PositionSnapshot::from).collect(),
            config: VaultConfigSnapshot::from(vault.config()),
        }
    }
}
