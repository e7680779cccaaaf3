//! The set of open option positions held by the vault.

use serde::{Deserialize, Serialize};

use crate::domain::order_flow::value_objects::OptionContract;
use crate::domain::shared::{Amount, AssetId, Timestamp};

/// One held option position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    contract: OptionContract,
    balance: Amount,
    acquired_at: Timestamp,
}

impl Position {
    /// Create a position record.
    #[must_use]
    pub const fn new(contract: OptionContract, balance: Amount, acquired_at: Timestamp) -> Self {
        Self {
            contract,
            balance,
            acquired_at,
        }
    }

    /// The option contract held.
    #[must_use]
    pub const fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Option-token balance held by the vault.
    #[must_use]
    pub const fn balance(&self) -> Amount {
        self.balance
    }

    /// When the position was acquired.
    #[must_use]
    pub const fn acquired_at(&self) -> Timestamp {
        self.acquired_at
    }
}

/// Insertion-ordered, unique-by-series set of open positions.
///
/// Uniqueness is structural: adding a series that is already present is a
/// no-op, never a duplicate entry. Iteration order is insertion order, which
/// is also the order the expiry sweep visits entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionLedger {
    positions: Vec<Position>,
}

impl PositionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Add a position unless its series is already held.
    ///
    /// Returns `true` if the position was inserted, `false` on the duplicate
    /// no-op.
    pub fn add(&mut self, contract: OptionContract, balance: Amount, now: Timestamp) -> bool {
        if self.contains(contract.series()) {
            return false;
        }
        self.positions.push(Position::new(contract, balance, now));
        true
    }

    /// Remove and return the position for `series`, if held.
    pub fn remove(&mut self, series: &AssetId) -> Option<Position> {
        let index = self
            .positions
            .iter()
            .position(|p| p.contract().series() == series)?;
        Some(self.positions.remove(index))
    }

    /// The position for `series`, if held.
    #[must_use]
    pub fn get(&self, series: &AssetId) -> Option<&Position> {
        self.positions
            .iter()
            .find(|p| p.contract().series() == series)
    }

    /// Whether `series` is a current member.
    #[must_use]
    pub fn contains(&self, series: &AssetId) -> bool {
        self.get(series).is_some()
    }

    /// The held balance of `series`, zero if not a member.
    #[must_use]
    pub fn balance_of(&self, series: &AssetId) -> Amount {
        self.get(series).map_or(Amount::ZERO, Position::balance)
    }

    /// Iterate positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Series ids in insertion order.
    #[must_use]
    pub fn series(&self) -> Vec<AssetId> {
        self.positions
            .iter()
            .map(|p| p.contract().series().clone())
            .collect()
    }

    /// Number of open positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the ledger holds no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Price;

    fn contract(series: &str, expiry: i64) -> OptionContract {
        OptionContract::put(
            AssetId::new(series),
            AssetId::new("wbtc"),
            AssetId::new("usdc"),
            AssetId::new("usdc"),
            Price::from_i64(800),
            Timestamp::from_unix_seconds(expiry),
        )
    }

    #[test]
    fn empty_ledger() {
        let ledger = PositionLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(!ledger.contains(&AssetId::new("opt-a")));
        assert_eq!(ledger.balance_of(&AssetId::new("opt-a")), Amount::ZERO);
    }

    #[test]
    fn add_and_lookup() {
        let mut ledger = PositionLedger::new();
        let inserted = ledger.add(
            contract("opt-a", 100),
            Amount::from_i64(3),
            Timestamp::from_unix_seconds(1),
        );
        assert!(inserted);
        assert!(ledger.contains(&AssetId::new("opt-a")));
        assert_eq!(ledger.balance_of(&AssetId::new("opt-a")), Amount::from_i64(3));
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut ledger = PositionLedger::new();
        ledger.add(
            contract("opt-a", 100),
            Amount::from_i64(3),
            Timestamp::from_unix_seconds(1),
        );
        let inserted = ledger.add(
            contract("opt-a", 100),
            Amount::from_i64(9),
            Timestamp::from_unix_seconds(2),
        );
        assert!(!inserted);
        assert_eq!(ledger.len(), 1);
        // Original balance survives the no-op.
        assert_eq!(ledger.balance_of(&AssetId::new("opt-a")), Amount::from_i64(3));
    }

    #[test]
    fn iteration_is_insertion_order() {
        let mut ledger = PositionLedger::new();
        for (series, expiry) in [("opt-c", 300), ("opt-a", 100), ("opt-b", 200)] {
            ledger.add(
                contract(series, expiry),
                Amount::from_i64(1),
                Timestamp::from_unix_seconds(0),
            );
        }
        let order: Vec<String> = ledger
            .iter()
            .map(|p| p.contract().series().as_str().to_string())
            .collect();
        assert_eq!(order, vec!["opt-c", "opt-a", "opt-b"]);
        assert_eq!(
            ledger.series(),
            vec![
                AssetId::new("opt-c"),
                AssetId::new("opt-a"),
                AssetId::new("opt-b")
            ]
        );
    }

    #[test]
    fn remove_returns_the_position() {
        let mut ledger = PositionLedger::new();
        ledger.add(
            contract("opt-a", 100),
            Amount::from_i64(3),
            Timestamp::from_unix_seconds(1),
        );
        ledger.add(
            contract("opt-b", 200),
            Amount::from_i64(5),
            Timestamp::from_unix_seconds(2),
        );

        let removed = ledger.remove(&AssetId::new("opt-a")).unwrap();
        assert_eq!(removed.balance(), Amount::from_i64(3));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.remove(&AssetId::new("opt-a")).is_none());
    }

    #[test]
    fn ledger_serde_roundtrip() {
        let mut ledger = PositionLedger::new();
        ledger.add(
            contract("opt-a", 100),
            Amount::from_i64(2),
            Timestamp::from_unix_seconds(5),
        );
        let json = serde_json::to_string(&ledger).unwrap();
        let parsed: PositionLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ledger);
    }
}
