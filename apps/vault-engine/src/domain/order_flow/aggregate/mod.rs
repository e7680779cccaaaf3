//! Vault aggregate root.

mod vault;

pub use vault::{AssetWiring, Vault};
