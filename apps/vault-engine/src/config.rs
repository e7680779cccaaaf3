//! Configuration module for the vault engine.
//!
//! Loads the engine's YAML configuration: the vault's asset wiring, the
//! capability accounts, and the initial risk parameters. Validation is
//! eager; a config that parses but fails domain validation never produces a
//! vault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order_flow::aggregate::AssetWiring;
use crate::domain::order_flow::value_objects::{VaultConfig, VaultConfigParams};
use crate::domain::order_flow::Vault;
use crate::domain::shared::{AccountId, AssetId, RoleRegistry};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Default configuration path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The single vault instance this engine runs.
    pub vault: VaultSection,
}

/// Configuration for one vault instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultSection {
    /// Asset wiring.
    pub assets: AssetsSection,
    /// Capability accounts.
    pub roles: RolesSection,
    /// Initial risk parameters.
    pub parameters: VaultConfigParams,
}

/// Asset wiring section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
    /// Asset the purchased puts are written on.
    pub underlying: String,
    /// Quote asset.
    pub quote: String,
    /// Native precision of the quote asset.
    #[serde(default = "default_quote_decimals")]
    pub quote_decimals: u32,
    /// Account holding the vault's token balances.
    pub custody: String,
}

/// Capability accounts section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesSection {
    /// The vault owner.
    pub owner: String,
    /// The broker filling buy orders.
    pub broker: String,
    /// The liquidator managing sell orders.
    pub liquidator: String,
    /// The controller mutating configuration.
    pub controller: String,
}

const fn default_quote_decimals() -> u32 {
    6
}

impl EngineConfig {
    /// Build the configured vault instance.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ValidationError`] if the risk parameters fail domain
    /// validation.
    pub fn build_vault(&self) -> Result<Vault, ConfigError> {
        let config = VaultConfig::new(self.vault.parameters.clone())
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(Vault::new(
            AssetWiring {
                underlying: AssetId::new(&self.vault.assets.underlying),
                quote: AssetId::new(&self.vault.assets.quote),
                quote_decimals: self.vault.assets.quote_decimals,
                custody: AccountId::new(&self.vault.assets.custody),
            },
            RoleRegistry::new(
                AccountId::new(&self.vault.roles.owner),
                AccountId::new(&self.vault.roles.broker),
                AccountId::new(&self.vault.roles.liquidator),
                AccountId::new(&self.vault.roles.controller),
            ),
            config,
        ))
    }
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// [`ConfigError::ReadError`] if the file cannot be read,
/// [`ConfigError::ParseError`] for malformed YAML, or
/// [`ConfigError::ValidationError`] from eager parameter validation.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;

    let config: EngineConfig = serde_yaml_bw::from_str(&raw)?;
    // Surface parameter problems at load time rather than first use.
    config.build_vault()?;
    Ok(config)
}
