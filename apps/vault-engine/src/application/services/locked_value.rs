//! Locked-value accounting.
//!
//! Computes, at query time, how much of total vault value is redeemable by
//! the owner versus locked in the active buy order or in open positions.
//! Marks are re-quoted on every call; nothing here is cached.

use std::sync::Arc;

use crate::application::ports::{
    AccountingError, PricingError, PricingGatewayPort, ShareAccountingPort, convert_to_shares,
};
use crate::domain::order_flow::Vault;
use crate::domain::order_flow::value_objects::BuyOrder;
use crate::domain::shared::value_objects::scale;
use crate::domain::shared::{AccountId, Amount, VaultError};

/// Application service backing the value queries.
pub struct LockedValueAccountant<P, S>
where
    P: PricingGatewayPort,
    S: ShareAccountingPort,
{
    pricing: Arc<P>,
    accounting: Arc<S>,
}

impl<P, S> LockedValueAccountant<P, S>
where
    P: PricingGatewayPort,
    S: ShareAccountingPort,
{
    /// Create a new accountant over the given collaborators.
    pub const fn new(pricing: Arc<P>, accounting: Arc<S>) -> Self {
        Self { pricing, accounting }
    }

    /// Estimated mark-to-market value of all open positions, in quote units.
    ///
    /// Sums `premium × balance` per position, each term normalized to the
    /// quote asset's precision.
    ///
    /// # Errors
    ///
    /// [`VaultError::PricingUnavailable`] if any premium quote fails.
    pub async fn mark_value(&self, vault: &Vault) -> Result<Amount, VaultError> {
        let quote_decimals = vault.assets().quote_decimals;
        let mut total = Amount::ZERO;

        for position in vault.positions().iter() {
            let contract = position.contract();
            let premium = self
                .pricing
                .premium(contract.strike(), contract.expiry(), contract.is_put())
                .await
                .map_err(pricing_unavailable)?;

            let value = premium.value() * position.balance().value();
            total = total + Amount::new(scale::truncate_to(value, quote_decimals));
        }

        Ok(total)
    }

    /// Vault value committed to the active buy order or held in positions.
    ///
    /// # Errors
    ///
    /// Propagates pricing failures from [`Self::mark_value`].
    pub async fn locked_value(&self, vault: &Vault) -> Result<Amount, VaultError> {
        let reserved = vault
            .buy_order()
            .map_or(Amount::ZERO, BuyOrder::underlying_amount);
        Ok(reserved + self.mark_value(vault).await?)
    }

    /// Total vault value minus locked value, floored at zero.
    ///
    /// # Errors
    ///
    /// Pricing or accounting failures from the underlying collaborators.
    pub async fn redeemable_value(&self, vault: &Vault) -> Result<Amount, VaultError> {
        let total = self
            .accounting
            .total_assets()
            .await
            .map_err(accounting_unavailable)?;
        let locked = self.locked_value(vault).await?;
        Ok(total.saturating_sub(locked))
    }

    /// Maximum quote-asset value `account` may withdraw right now.
    ///
    /// Zero for any account other than the vault owner.
    ///
    /// # Errors
    ///
    /// Pricing or accounting failures from the underlying collaborators.
    pub async fn max_withdraw(
        &self,
        vault: &Vault,
        account: &AccountId,
    ) -> Result<Amount, VaultError> {
        if account != vault.roles().owner() {
            return Ok(Amount::ZERO);
        }
        self.redeemable_value(vault).await
    }

    /// Maximum ownership units `account` may redeem right now.
    ///
    /// The ownership-unit equivalent of [`Self::max_withdraw`], converted via
    /// the external proportional-ownership capability.
    ///
    /// # Errors
    ///
    /// Pricing or accounting failures from the underlying collaborators.
    pub async fn max_redeem(
        &self,
        vault: &Vault,
        account: &AccountId,
    ) -> Result<Amount, VaultError> {
        let assets = self.max_withdraw(vault, account).await?;
        if assets.is_zero() {
            return Ok(Amount::ZERO);
        }

        let supply = self
            .accounting
            .total_supply()
            .await
            .map_err(accounting_unavailable)?;
        let total = self
            .accounting
            .total_assets()
            .await
            .map_err(accounting_unavailable)?;
        Ok(convert_to_shares(assets, supply, total))
    }
}

fn pricing_unavailable(err: PricingError) -> VaultError {
    VaultError::PricingUnavailable {
        reason: err.to_string(),
    }
}

fn accounting_unavailable(err: AccountingError) -> VaultError {
    VaultError::AccountingUnavailable {
        reason: err.to_string(),
    }
}
