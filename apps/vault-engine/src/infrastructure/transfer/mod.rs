//! Asset transfer adapters.

mod in_memory;

pub use in_memory::InMemoryAssetLedger;
