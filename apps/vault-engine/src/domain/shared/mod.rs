//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::{AssetKind, OrderKind, VaultError};
pub use value_objects::{AccountId, Amount, AssetId, Price, Role, RoleRegistry, Timestamp, scale};
