//! Share Accounting Port (Driven Port)
//!
//! The slice of the generic proportional-ownership vault mechanics the core
//! depends on: total supply/assets queries and the proportional conversion
//! between asset value and ownership units.

use async_trait::async_trait;

use crate::domain::shared::Amount;

/// Share accounting error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountingError {
    /// The accounting layer could not be reached.
    #[error("Share accounting unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

/// Port for the proportional-ownership accounting totals.
#[async_trait]
pub trait ShareAccountingPort: Send + Sync {
    /// Total vault value in quote-asset units.
    async fn total_assets(&self) -> Result<Amount, AccountingError>;

    /// Total ownership units outstanding.
    async fn total_supply(&self) -> Result<Amount, AccountingError>;
}

/// Convert an asset value into ownership units.
///
/// `shares = assets * total_supply / total_assets`; the conversion is the
/// identity when either total is zero (an empty vault prices shares 1:1).
#[must_use]
pub fn convert_to_shares(assets: Amount, total_supply: Amount, total_assets: Amount) -> Amount {
    if total_supply.is_zero() || total_assets.is_zero() {
        return assets;
    }
    Amount::new(assets.value() * total_supply.value() / total_assets.value())
}

/// Convert ownership units into an asset value.
///
/// Inverse of [`convert_to_shares`] with the same identity rule.
#[must_use]
pub fn convert_to_assets(shares: Amount, total_supply: Amount, total_assets: Amount) -> Amount {
    if total_supply.is_zero() || total_assets.is_zero() {
        return shares;
    }
    Amount::new(shares.value() * total_assets.value() / total_supply.value())
}
