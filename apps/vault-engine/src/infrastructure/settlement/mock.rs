//! Mock settlement adapter for testing.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{RedeemOutcome, SettlementError, SettlementPort};
use crate::domain::shared::AssetId;

/// Mock settlement with per-option expiry switches.
///
/// Every option starts not-yet-expired; tests flip individual series to
/// expired (or failing) to drive the sweep.
#[derive(Debug, Default)]
pub struct MockSettlement {
    expired: RwLock<HashSet<String>>,
    failing: RwLock<HashSet<String>>,
}

impl MockSettlement {
    /// Create a settlement layer where nothing has expired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `option` as expired and redeemable.
    pub fn mark_expired(&self, option: &AssetId) {
        self.expired
            .write()
            .expect("expired lock")
            .insert(option.as_str().to_string());
    }

    /// Make redemption attempts for `option` fail.
    pub fn mark_failing(&self, option: &AssetId) {
        self.failing
            .write()
            .expect("failing lock")
            .insert(option.as_str().to_string());
    }
}

#[async_trait]
impl SettlementPort for MockSettlement {
    async fn redeem_if_expired(&self, option: &AssetId) -> Result<RedeemOutcome, SettlementError> {
        if self
            .failing
            .read()
            .expect("failing lock")
            .contains(option.as_str())
        {
            return Err(SettlementError::Failed {
                option: option.clone(),
                message: "settlement layer rejected the call".to_string(),
            });
        }
        if self
            .expired
            .read()
            .expect("expired lock")
            .contains(option.as_str())
        {
            Ok(RedeemOutcome::Settled)
        } else {
            Ok(RedeemOutcome::NotYetExpired)
        }
    }
}
