//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod amount;
mod identifiers;
mod price;
mod role;
pub mod scale;
mod timestamp;

pub use amount::Amount;
pub use identifiers::{AccountId, AssetId};
pub use price::Price;
pub use role::{Role, RoleRegistry};
pub use timestamp::Timestamp;
