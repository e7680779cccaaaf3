//! Order-flow value objects.

mod buy_order;
mod option_contract;
mod order_window;
mod sell_order;
mod vault_config;

pub use buy_order::BuyOrder;
pub use option_contract::{OptionContract, OptionRight};
pub use order_window::OrderWindow;
pub use sell_order::SellOrder;
pub use vault_config::{ConfigChange, ConfigField, VaultConfig, VaultConfigParams};
