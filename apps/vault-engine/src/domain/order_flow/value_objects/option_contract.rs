//! Option Contract Value Object

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AssetId, Price, Timestamp};

/// Option right (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// An option series offered to, or held by, the vault.
///
/// The series id doubles as the asset id of the option token itself, so a
/// held position can be moved with the same transfer primitive as any other
/// asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Asset id of the option token.
    series: AssetId,
    /// Asset the option is written on.
    underlying: AssetId,
    /// Asset backing the writer's obligation.
    collateral: AssetId,
    /// Asset the strike is denominated in.
    strike_asset: AssetId,
    /// Strike price.
    strike: Price,
    /// Expiry instant.
    expiry: Timestamp,
    /// Call or put.
    right: OptionRight,
    /// Native precision of the option token.
    decimals: u32,
}

impl OptionContract {
    /// Default option-token precision.
    pub const DEFAULT_DECIMALS: u32 = 8;

    /// Create a new option contract.
    #[must_use]
    pub fn new(
        series: AssetId,
        underlying: AssetId,
        collateral: AssetId,
        strike_asset: AssetId,
        strike: Price,
        expiry: Timestamp,
        right: OptionRight,
    ) -> Self {
        Self {
            series,
            underlying,
            collateral,
            strike_asset,
            strike,
            expiry,
            right,
            decimals: Self::DEFAULT_DECIMALS,
        }
    }

    /// Create a put contract.
    #[must_use]
    pub fn put(
        series: AssetId,
        underlying: AssetId,
        collateral: AssetId,
        strike_asset: AssetId,
        strike: Price,
        expiry: Timestamp,
    ) -> Self {
        Self::new(
            series,
            underlying,
            collateral,
            strike_asset,
            strike,
            expiry,
            OptionRight::Put,
        )
    }

    /// Set a non-default token precision.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Asset id of the option token.
    #[must_use]
    pub const fn series(&self) -> &AssetId {
        &self.series
    }

    /// Asset the option is written on.
    #[must_use]
    pub const fn underlying(&self) -> &AssetId {
        &self.underlying
    }

    /// Asset backing the writer's obligation.
    #[must_use]
    pub const fn collateral(&self) -> &AssetId {
        &self.collateral
    }

    /// Asset the strike is denominated in.
    #[must_use]
    pub const fn strike_asset(&self) -> &AssetId {
        &self.strike_asset
    }

    /// Strike price.
    #[must_use]
    pub const fn strike(&self) -> Price {
        self.strike
    }

    /// Expiry instant.
    #[must_use]
    pub const fn expiry(&self) -> Timestamp {
        self.expiry
    }

    /// The option right.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Native precision of the option token.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Check if this is a put option.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.right, OptionRight::Put)
    }

    /// Check if the option has expired as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiry < now
    }
}
