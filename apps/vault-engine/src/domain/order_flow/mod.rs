//! Order Flow Bounded Context
//!
//! The order lifecycle for one vault instance: sizing and validation policy,
//! the single buy-order and sell-order slots, configuration, and the domain
//! events every transition records.

pub mod aggregate;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregate::{AssetWiring, Vault};
pub use events::VaultEvent;
pub use value_objects::{
    BuyOrder, ConfigChange, ConfigField, OptionContract, OptionRight, OrderWindow, SellOrder,
    VaultConfig, VaultConfigParams,
};
