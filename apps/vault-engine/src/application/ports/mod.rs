//! Application Ports (Driven)
//!
//! Ports define interfaces for the external collaborators the vault core
//! consumes: the pricing oracle, the token transfer primitive, the option
//! settlement call, the event sink, and the proportional-ownership
//! accounting.

mod event_publisher_port;
mod pricing_port;
mod settlement_port;
mod share_accounting_port;
mod transfer_port;

pub use event_publisher_port::{EventPublishError, EventPublisherPort, NoOpEventPublisher};
pub use pricing_port::{PricingError, PricingGatewayPort};
pub use settlement_port::{RedeemOutcome, SettlementError, SettlementPort};
pub use share_accounting_port::{
    AccountingError, ShareAccountingPort, convert_to_assets, convert_to_shares,
};
pub use transfer_port::{AssetTransferPort, TransferError};
