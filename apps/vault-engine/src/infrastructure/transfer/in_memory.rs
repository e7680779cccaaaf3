//! In-memory asset ledger honoring the transfer primitive.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{AssetTransferPort, TransferError};
use crate::domain::shared::{AccountId, Amount, AssetId};

/// In-memory account/asset balances for tests and harnesses.
///
/// Transfers fail on insufficient funds, mirroring the failure mode of a
/// real token layer, and balances are assertable after the fact.
#[derive(Debug, Default)]
pub struct InMemoryAssetLedger {
    balances: RwLock<HashMap<(String, String), Amount>>,
}

impl InMemoryAssetLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` of `asset` to `account`.
    pub fn mint(&self, asset: &AssetId, account: &AccountId, amount: Amount) {
        let mut balances = self.balances.write().expect("balances lock");
        let entry = balances
            .entry(Self::key(asset, account))
            .or_insert(Amount::ZERO);
        *entry = *entry + amount;
    }

    /// The balance of `asset` held by `account`.
    #[must_use]
    pub fn balance_of(&self, asset: &AssetId, account: &AccountId) -> Amount {
        self.balances
            .read()
            .expect("balances lock")
            .get(&Self::key(asset, account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn key(asset: &AssetId, account: &AccountId) -> (String, String) {
        (asset.as_str().to_string(), account.as_str().to_string())
    }
}

#[async_trait]
impl AssetTransferPort for InMemoryAssetLedger {
    async fn transfer(
        &self,
        asset: &AssetId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let mut balances = self.balances.write().expect("balances lock");

        let from_key = Self::key(asset, from);
        let available = balances.get(&from_key).copied().unwrap_or(Amount::ZERO);
        if amount > available {
            return Err(TransferError::InsufficientFunds {
                asset: asset.clone(),
                requested: amount,
                available,
            });
        }

        balances.insert(from_key, available - amount);
        let to_entry = balances
            .entry(Self::key(asset, to))
            .or_insert(Amount::ZERO);
        *to_entry = *to_entry + amount;
        Ok(())
    }
}
