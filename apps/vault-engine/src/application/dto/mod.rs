//! Data transfer objects for the query surface.

mod snapshots;

pub use snapshots::{
    BuyOrderSnapshot, PositionSnapshot, SellOrderSnapshot, VaultConfigSnapshot, VaultSnapshot,
};
