//! Cancel Order Use Case
//!
//! Privileged parties cancel their own orders at will; once an order is
//! stale, any caller may force-cancel it.

use std::sync::Arc;

use super::publish_drained;
use crate::application::dto::{BuyOrderSnapshot, SellOrderSnapshot};
use crate::application::ports::EventPublisherPort;
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, Timestamp, VaultError};

/// Use case for cancelling buy and sell orders.
pub struct CancelOrderUseCase<E>
where
    E: EventPublisherPort,
{
    publisher: Arc<E>,
}

impl<E> CancelOrderUseCase<E>
where
    E: EventPublisherPort,
{
    /// Create a new `CancelOrderUseCase`.
    pub const fn new(publisher: Arc<E>) -> Self {
        Self { publisher }
    }

    /// Cancel the active buy order.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] or [`VaultError::Unauthorized`].
    pub async fn cancel_buy(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
    ) -> Result<BuyOrderSnapshot, VaultError> {
        let order = vault.cancel_buy_order(caller, Timestamp::now())?;
        tracing::info!(amount = %order.underlying_amount(), "buy order cancelled");

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(BuyOrderSnapshot::from(&order))
    }

    /// Cancel the active sell order.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] or [`VaultError::Unauthorized`].
    pub async fn cancel_sell(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
    ) -> Result<SellOrderSnapshot, VaultError> {
        let order = vault.cancel_sell_order(caller, Timestamp::now())?;
        tracing::info!(option = %order.option(), "sell order cancelled");

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(SellOrderSnapshot::from(&order))
    }
}
