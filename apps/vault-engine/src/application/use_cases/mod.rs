//! Application use cases.
//!
//! Each use case orchestrates one public vault operation: resolve the
//! caller's role, gather decision-time quotes, drive the aggregate, then
//! publish whatever events the transition recorded. External-call failures
//! surface before any aggregate mutation, so a failed operation leaves no
//! partial state change.

mod cancel_order;
mod create_sell_order;
mod deposit;
mod fill_buy_order;
mod sweep_expired;
mod update_config;

pub use cancel_order::CancelOrderUseCase;
pub use create_sell_order::CreateSellOrderUseCase;
pub use deposit::DepositUseCase;
pub use fill_buy_order::{FillBuyOrderUseCase, FillResult};
pub use sweep_expired::{SweepExpiredUseCase, SweepReport};
pub use update_config::UpdateConfigUseCase;

use crate::application::ports::{EventPublisherPort, PricingError, TransferError};
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AssetId, VaultError};

/// Drain and publish the vault's recorded events.
///
/// Publishing is observability, not state: a publish failure is logged and
/// does not fail the enclosing operation.
pub(crate) async fn publish_drained<E: EventPublisherPort>(vault: &mut Vault, publisher: &E) {
    let events = vault.drain_events();
    if events.is_empty() {
        return;
    }
    if let Err(e) = publisher.publish_events(events).await {
        tracing::error!("Failed to publish vault events: {}", e);
    }
}

pub(crate) fn pricing_unavailable(err: PricingError) -> VaultError {
    VaultError::PricingUnavailable {
        reason: err.to_string(),
    }
}

pub(crate) fn transfer_failed(asset: &AssetId, err: &TransferError) -> VaultError {
    VaultError::TransferFailed {
        asset: asset.clone(),
        reason: err.to_string(),
    }
}
