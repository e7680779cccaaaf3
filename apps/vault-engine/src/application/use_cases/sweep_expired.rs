//! Sweep Expired Use Case
//!
//! Settles expired option positions and removes them from the ledger. The
//! sweep is invoked by external callers or timers, never self-scheduled, and
//! any caller may trigger it.

use std::sync::Arc;

use super::publish_drained;
use crate::application::ports::{EventPublisherPort, RedeemOutcome, SettlementPort};
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AssetId, Timestamp};

/// What one sweep pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Series settled and removed, in sweep order.
    pub settled: Vec<AssetId>,
    /// Entries left untouched because they have not expired.
    pub skipped: usize,
    /// Entries whose settlement attempt failed; they stay in the ledger for
    /// the next pass.
    pub failed: usize,
}

/// Use case for the expiry sweep.
pub struct SweepExpiredUseCase<S, E>
where
    S: SettlementPort,
    E: EventPublisherPort,
{
    settlement: Arc<S>,
    publisher: Arc<E>,
}

impl<S, E> SweepExpiredUseCase<S, E>
where
    S: SettlementPort,
    E: EventPublisherPort,
{
    /// Create a new `SweepExpiredUseCase`.
    pub const fn new(settlement: Arc<S>, publisher: Arc<E>) -> Self {
        Self {
            settlement,
            publisher,
        }
    }

    /// Sweep the ledger once, visiting entries in insertion order.
    ///
    /// Each entry's outcome is independent: a not-yet-expired or failing
    /// entry never aborts processing of the rest, and an empty ledger is a
    /// successful no-op.
    pub async fn sweep(&self, vault: &mut Vault) -> SweepReport {
        let now = Timestamp::now();
        let mut report = SweepReport::default();

        for series in vault.positions().series() {
            match self.settlement.redeem_if_expired(&series).await {
                Ok(RedeemOutcome::Settled) => match vault.apply_redemption(&series, now) {
                    Ok(_) => {
                        tracing::info!(option = %series, "expired position settled and removed");
                        report.settled.push(series);
                    }
                    Err(e) => {
                        tracing::warn!(option = %series, "settled option not in ledger: {}", e);
                        report.failed += 1;
                    }
                },
                Ok(RedeemOutcome::NotYetExpired) => {
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(option = %series, "settlement attempt failed: {}", e);
                    report.failed += 1;
                }
            }
        }

        publish_drained(vault, self.publisher.as_ref()).await;
        report
    }
}
