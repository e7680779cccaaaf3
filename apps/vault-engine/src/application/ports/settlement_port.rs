//! Option Settlement Port (Driven Port)
//!
//! The options-protocol redemption call used by the expiry sweep.

use async_trait::async_trait;

use crate::domain::shared::AssetId;

/// Outcome of a redemption attempt.
///
/// `NotYetExpired` is an expected non-error outcome: the sweep leaves the
/// position untouched and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemOutcome {
    /// The option was expired and has been settled; proceeds are back in the
    /// vault's quote balance.
    Settled,
    /// The option has not expired yet.
    NotYetExpired,
}

/// Settlement error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettlementError {
    /// The settlement layer rejected the call.
    #[error("Settlement of {option} failed: {message}")]
    Failed {
        /// Option series being settled.
        option: AssetId,
        /// Failure detail.
        message: String,
    },
}

/// Port for settling expired option positions.
#[async_trait]
pub trait SettlementPort: Send + Sync {
    /// Attempt to redeem `option` if it has expired.
    async fn redeem_if_expired(&self, option: &AssetId) -> Result<RedeemOutcome, SettlementError>;
}
