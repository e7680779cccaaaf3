//! Domain events for the vault's order lifecycle.
//!
//! Events capture state transitions and are observable by external monitors.

use serde::{Deserialize, Serialize};

use crate::domain::order_flow::value_objects::{ConfigField, OrderWindow};
use crate::domain::shared::{Amount, AssetId, Timestamp};

/// All events the vault emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaultEvent {
    /// A buy order became active.
    BuyOrderCreated(BuyOrderCreated),
    /// A buy order was filled by the broker.
    BuyOrderFilled(BuyOrderFilled),
    /// A buy order was cancelled.
    BuyOrderCancelled(BuyOrderCancelled),
    /// A sell order became active.
    SellOrderCreated(SellOrderCreated),
    /// A sell order was cancelled.
    SellOrderCancelled(SellOrderCancelled),
    /// A held position was settled away by the expiry sweep.
    OptionRedeemed(OptionRedeemed),
    /// A vault configuration field changed.
    ConfigUpdated(ConfigUpdated),
}

impl VaultEvent {
    /// Get the timestamp when this event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> Timestamp {
        match self {
            Self::BuyOrderCreated(e) => e.occurred_at,
            Self::BuyOrderFilled(e) => e.occurred_at,
            Self::BuyOrderCancelled(e) => e.occurred_at,
            Self::SellOrderCreated(e) => e.occurred_at,
            Self::SellOrderCancelled(e) => e.occurred_at,
            Self::OptionRedeemed(e) => e.occurred_at,
            Self::ConfigUpdated(e) => e.occurred_at,
        }
    }

    /// Get the event type name.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::BuyOrderCreated(_) => "BUY_ORDER_CREATED",
            Self::BuyOrderFilled(_) => "BUY_ORDER_FILLED",
            Self::BuyOrderCancelled(_) => "BUY_ORDER_CANCELLED",
            Self::SellOrderCreated(_) => "SELL_ORDER_CREATED",
            Self::SellOrderCancelled(_) => "SELL_ORDER_CANCELLED",
            Self::OptionRedeemed(_) => "OPTION_REDEEMED",
            Self::ConfigUpdated(_) => "CONFIG_UPDATED",
        }
    }
}

/// Event: a buy order became active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrderCreated {
    /// The order's strike/expiry window.
    pub window: OrderWindow,
    /// Quote-asset units reserved for the purchase.
    pub amount: Amount,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a buy order was filled by the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrderFilled {
    /// The option series received.
    pub option: AssetId,
    /// Option-token quantity received.
    pub amount: Amount,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a buy order was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrderCancelled {
    /// The cancelled order's window.
    pub window: OrderWindow,
    /// Quote-asset units that were reserved.
    pub amount: Amount,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a sell order became active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrderCreated {
    /// The option series offered for sale.
    pub option: AssetId,
    /// Option-token quantity offered.
    pub amount: Amount,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a sell order was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOrderCancelled {
    /// The option series that was offered.
    pub option: AssetId,
    /// Option-token quantity that was offered.
    pub amount: Amount,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a held position was settled away by the expiry sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRedeemed {
    /// The settled option series.
    pub option: AssetId,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}

/// Event: a vault configuration field changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdated {
    /// The field that changed.
    pub field: ConfigField,
    /// When the event occurred.
    pub occurred_at: Timestamp,
}
