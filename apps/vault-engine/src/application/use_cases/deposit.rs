//! Deposit Use Case
//!
//! A qualifying deposit auto-sizes a buy order against the spot price quoted
//! at decision time.

use std::sync::Arc;

use super::{pricing_unavailable, publish_drained};
use crate::application::dto::BuyOrderSnapshot;
use crate::application::ports::{EventPublisherPort, PricingGatewayPort};
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, Amount, Role, Timestamp, VaultError};

/// Use case for owner deposits.
pub struct DepositUseCase<P, E>
where
    P: PricingGatewayPort,
    E: EventPublisherPort,
{
    pricing: Arc<P>,
    publisher: Arc<E>,
}

impl<P, E> DepositUseCase<P, E>
where
    P: PricingGatewayPort,
    E: EventPublisherPort,
{
    /// Create a new `DepositUseCase`.
    pub const fn new(pricing: Arc<P>, publisher: Arc<E>) -> Self {
        Self { pricing, publisher }
    }

    /// Register a deposit of `value` quote units.
    ///
    /// Returns the created buy order's snapshot, or `None` when the deposit
    /// fell below the chunk threshold and deliberately created nothing.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-owners, plus order-creation
    /// failures from the aggregate.
    pub async fn deposit(
        &self,
        vault: &mut Vault,
        caller: &AccountId,
        value: Amount,
    ) -> Result<Option<BuyOrderSnapshot>, VaultError> {
        match vault.resolve_role(caller) {
            Role::Owner => {}
            resolved => {
                return Err(VaultError::Unauthorized {
                    required: Role::Owner,
                    resolved,
                });
            }
        }

        let spot = self.pricing.spot().await.map_err(pricing_unavailable)?;
        let now = Timestamp::now();

        let created = vault
            .create_buy_order(value, spot, now)?
            .map(BuyOrderSnapshot::from);

        match &created {
            Some(order) => {
                tracing::info!(
                    amount = %order.underlying_amount,
                    min_strike = %order.min_strike,
                    max_strike = %order.max_strike,
                    "buy order created from deposit"
                );
            }
            None => {
                tracing::debug!(value = %value, "deposit below chunk threshold, no order created");
            }
        }

        publish_drained(vault, self.publisher.as_ref()).await;
        Ok(created)
    }
}
