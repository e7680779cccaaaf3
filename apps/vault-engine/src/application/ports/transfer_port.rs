//! Asset Transfer Port (Driven Port)
//!
//! The token-movement primitive used during fills. A failed transfer aborts
//! the enclosing operation.

use async_trait::async_trait;

use crate::domain::shared::{AccountId, Amount, AssetId};

/// Asset transfer error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransferError {
    /// The source account does not hold enough of the asset.
    #[error("Insufficient {asset} balance: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Asset being moved.
        asset: AssetId,
        /// Quantity requested.
        requested: Amount,
        /// Quantity available.
        available: Amount,
    },

    /// The transfer was rejected by the asset layer.
    #[error("Transfer of {asset} rejected: {message}")]
    Rejected {
        /// Asset being moved.
        asset: AssetId,
        /// Rejection detail.
        message: String,
    },
}

/// Port for moving assets between accounts.
#[async_trait]
pub trait AssetTransferPort: Send + Sync {
    /// Move `amount` of `asset` from `from` to `to`.
    async fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
