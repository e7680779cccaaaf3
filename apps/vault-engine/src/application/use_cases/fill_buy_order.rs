//! Fill Buy Order Use Case
//!
//! The broker settles an open buy order by delivering option tokens priced
//! by the gateway at decision time. This is the only path that creates a
//! position.

use std::sync::Arc;

use super::{pricing_unavailable, publish_drained, transfer_failed};
use crate::application::ports::{AssetTransferPort, EventPublisherPort, PricingGatewayPort};
use crate::domain::order_flow::services::order_policy;
use crate::domain::order_flow::value_objects::OptionContract;
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, Amount, AssetId, Role, Timestamp, VaultError};

/// What a successful fill moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillResult {
    /// The option series taken into custody.
    pub option: AssetId,
    /// Option tokens moved from the broker to the vault.
    pub amount: Amount,
    /// Quote units moved from the vault to the broker.
    pub spent: Amount,
}

/// Use case for broker fills of the active buy order.
pub struct FillBuyOrderUseCase<P, T, E>
where
    P: PricingGatewayPort,
    T: AssetTransferPort,
    E: EventPublisherPort,
{
    pricing: Arc<P>,
    transfers: Arc<T>,
    publisher: Arc<E>,
}

impl<P, T, E> FillBuyOrderUseCase<P, T, E>
where
    P: PricingGatewayPort,
    T: AssetTransferPort,
    E: EventPublisherPort,
{
    /// Create a new `FillBuyOrderUseCase`.
    pub const fn new(pricing: Arc<P>, transfers: Arc<T>, publisher: Arc<E>) -> Self {
        Self {
            pricing,
            transfers,
            publisher,
        }
    }

    /// Fill the active buy order with `offered` tokens of `option`.
    ///
    /// Exactly the required token quantity is taken from the broker even
    /// when more is offered, and exactly the order's reserved quote amount
    /// is paid out.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-brokers,
    /// [`VaultError::OrderNotActive`], the policy's candidate checks,
    /// [`VaultError::InsufficientOffer`], or [`VaultError::TransferFailed`].
    pub async fn fill(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
        option: OptionContract,
        offered: Amount,
    ) -> Result<FillResult, VaultError> {
        match vault.resolve_role(caller) {
            Role::Broker => {}
            resolved => {
                return Err(VaultError::Unauthorized {
                    required: Role::Broker,
                    resolved,
                });
            }
        }

        let order = vault.validate_fill_candidate(&option)?;
        let order_value = order.underlying_amount();

        let premium = self
            .pricing
            .premium(option.strike(), option.expiry(), true)
            .await
            .map_err(pricing_unavailable)?;
        let required = order_policy::required_option_amount(
            order_value,
            premium,
            vault.config().option_premium_discount(),
            option.decimals(),
        )?;
        order_policy::ensure_offer_covers(required, offered)?;

        let series = option.series().clone();
        let custody = vault.assets().custody.clone();
        let quote = vault.assets().quote.clone();

        // Two legs: option tokens in, quote out. A failed second leg unwinds
        // the first before the error surfaces, so no partial exchange
        // survives the operation.
        self.transfers
            .transfer(&series, caller, &custody, required)
            .await
            .map_err(|e| transfer_failed(&series, &e))?;
        if let Err(e) = self
            .transfers
            .transfer(&quote, &custody, caller, order_value)
            .await
        {
            if let Err(undo) = self
                .transfers
                .transfer(&series, &custody, caller, required)
                .await
            {
                tracing::error!("Failed to unwind option leg of aborted fill: {}", undo);
            }
            return Err(transfer_failed(&quote, &e));
        }

        vault.apply_buy_fill(option, required, Timestamp::now())?;
        tracing::info!(
            option = %series,
            amount = %required,
            spent = %order_value,
            "buy order filled"
        );

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(FillResult {
            option: series,
            amount: required,
            spent: order_value,
        })
    }
}
