//! Create Sell Order Use Case
//!
//! The liquidator opens a disposal order against a held position.

use std::sync::Arc;

use super::publish_drained;
use crate::application::dto::SellOrderSnapshot;
use crate::application::ports::EventPublisherPort;
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, Amount, AssetId, Timestamp, VaultError};

/// Use case for liquidator sell-order creation.
pub struct CreateSellOrderUseCase<E>
where
    E: EventPublisherPort,
{
    publisher: Arc<E>,
}

impl<E> CreateSellOrderUseCase<E>
where
    E: EventPublisherPort,
{
    /// Create a new `CreateSellOrderUseCase`.
    pub const fn new(publisher: Arc<E>) -> Self {
        Self { publisher }
    }

    /// Open a sell order for `amount` tokens of a held `option`.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-liquidators,
    /// [`VaultError::OrderAlreadyActive`], [`VaultError::UnknownPosition`],
    /// or [`VaultError::InsufficientBalance`].
    pub async fn create(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
        option: &AssetId,
        amount: Amount,
    ) -> Result<SellOrderSnapshot, VaultError> {
        let snapshot = SellOrderSnapshot::from(vault.create_sell_order(
            caller,
            option,
            amount,
            Timestamp::now(),
        )?);
        tracing::info!(option = %snapshot.option, amount = %snapshot.amount, "sell order created");

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(snapshot)
    }
}
