//! Position Bounded Context
//!
//! The set of open option positions held by the vault.

mod ledger;

pub use ledger::{Position, PositionLedger};
