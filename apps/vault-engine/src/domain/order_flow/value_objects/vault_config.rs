//! Vault risk-bound configuration.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Amount, VaultError};

/// Field names used by config-change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigField {
    /// `strike_multiplier` bounds.
    StrikeMultiplier,
    /// `expiry_delta` bounds.
    ExpiryDelta,
    /// `option_premium_ratio`.
    OptionPremiumRatio,
    /// `itm_option_price_ratio`.
    ItmOptionPriceRatio,
    /// `option_premium_discount`.
    OptionPremiumDiscount,
    /// `min_chunk_value`.
    MinChunkValue,
    /// `max_order_active`.
    MaxOrderActive,
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrikeMultiplier => write!(f, "strike_multiplier"),
            Self::ExpiryDelta => write!(f, "expiry_delta"),
            Self::OptionPremiumRatio => write!(f, "option_premium_ratio"),
            Self::ItmOptionPriceRatio => write!(f, "itm_option_price_ratio"),
            Self::OptionPremiumDiscount => write!(f, "option_premium_discount"),
            Self::MinChunkValue => write!(f, "min_chunk_value"),
            Self::MaxOrderActive => write!(f, "max_order_active"),
        }
    }
}

/// A single-field configuration change request.
///
/// One variant per mutable field so the controller path can validate and
/// event each change with an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    /// Replace the strike-multiplier bounds.
    StrikeMultiplier {
        /// New lower bound (fraction of spot).
        min: Decimal,
        /// New upper bound (fraction of spot).
        max: Decimal,
    },
    /// Replace the expiry-delta bounds.
    ExpiryDelta {
        /// New minimum time-to-expiry.
        min: Duration,
        /// New maximum time-to-expiry.
        max: Duration,
    },
    /// Replace the option premium ratio.
    OptionPremiumRatio(Decimal),
    /// Replace the in-the-money option price ratio.
    ItmOptionPriceRatio(Decimal),
    /// Replace the premium discount applied to sizing.
    OptionPremiumDiscount(Decimal),
    /// Replace the minimum deposit value that triggers order creation.
    MinChunkValue(Amount),
    /// Replace the stale-order cancellation timeout.
    MaxOrderActive(Duration),
}

impl ConfigChange {
    /// The field this change targets.
    #[must_use]
    pub const fn field(&self) -> ConfigField {
        match self {
            Self::StrikeMultiplier { .. } => ConfigField::StrikeMultiplier,
            Self::ExpiryDelta { .. } => ConfigField::ExpiryDelta,
            Self::OptionPremiumRatio(_) => ConfigField::OptionPremiumRatio,
            Self::ItmOptionPriceRatio(_) => ConfigField::ItmOptionPriceRatio,
            Self::OptionPremiumDiscount(_) => ConfigField::OptionPremiumDiscount,
            Self::MinChunkValue(_) => ConfigField::MinChunkValue,
            Self::MaxOrderActive(_) => ConfigField::MaxOrderActive,
        }
    }
}

/// Initial values for a [`VaultConfig`], prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfigParams {
    /// Lower strike bound as a fraction of spot, in (0, 1).
    pub strike_multiplier_min: Decimal,
    /// Upper strike bound as a fraction of spot, in (0, 1).
    pub strike_multiplier_max: Decimal,
    /// Minimum time-to-expiry for offered contracts, in seconds.
    pub expiry_delta_min_secs: i64,
    /// Maximum time-to-expiry for offered contracts, in seconds.
    pub expiry_delta_max_secs: i64,
    /// Premium ratio applied to order sizing, > 0.
    pub option_premium_ratio: Decimal,
    /// Price ratio applied to in-the-money marks, > 0.
    pub itm_option_price_ratio: Decimal,
    /// Premium discount applied to sizing, in [0, 1).
    pub option_premium_discount: Decimal,
    /// Minimum deposit value that triggers auto-order creation.
    pub min_chunk_value: Amount,
    /// Duration after which any caller may cancel an order, in seconds.
    pub max_order_active_secs: i64,
}

/// Owner-configured risk bounds for order sizing and validation.
///
/// Every mutation path validates eagerly: an invalid value is rejected with
/// [`VaultError::ConfigInvalid`] before it is stored, never at use time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    strike_multiplier_min: Decimal,
    strike_multiplier_max: Decimal,
    expiry_delta_min_secs: i64,
    expiry_delta_max_secs: i64,
    option_premium_ratio: Decimal,
    itm_option_price_ratio: Decimal,
    option_premium_discount: Decimal,
    min_chunk_value: Amount,
    max_order_active_secs: i64,
}

impl VaultConfig {
    /// Validate `params` and build a config.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ConfigInvalid`] naming the first rejected field.
    pub fn new(params: VaultConfigParams) -> Result<Self, VaultError> {
        validate_strike_multiplier(params.strike_multiplier_min, params.strike_multiplier_max)?;
        validate_expiry_delta(params.expiry_delta_min_secs, params.expiry_delta_max_secs)?;
        validate_positive_ratio("option_premium_ratio", params.option_premium_ratio)?;
        validate_positive_ratio("itm_option_price_ratio", params.itm_option_price_ratio)?;
        validate_discount(params.option_premium_discount)?;
        validate_min_chunk(params.min_chunk_value)?;
        validate_max_order_active(params.max_order_active_secs)?;

        Ok(Self {
            strike_multiplier_min: params.strike_multiplier_min,
            strike_multiplier_max: params.strike_multiplier_max,
            expiry_delta_min_secs: params.expiry_delta_min_secs,
            expiry_delta_max_secs: params.expiry_delta_max_secs,
            option_premium_ratio: params.option_premium_ratio,
            itm_option_price_ratio: params.itm_option_price_ratio,
            option_premium_discount: params.option_premium_discount,
            min_chunk_value: params.min_chunk_value,
            max_order_active_secs: params.max_order_active_secs,
        })
    }

    /// Validate and apply a single-field change.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::ConfigInvalid`] and leaves the config untouched
    /// if the new value fails validation.
    pub fn apply(&mut self, change: ConfigChange) -> Result<(), VaultError> {
        match change {
            ConfigChange::StrikeMultiplier { min, max } => {
                validate_strike_multiplier(min, max)?;
                self.strike_multiplier_min = min;
                self.strike_multiplier_max = max;
            }
            ConfigChange::ExpiryDelta { min, max } => {
                validate_expiry_delta(min.num_seconds(), max.num_seconds())?;
                self.expiry_delta_min_secs = min.num_seconds();
                self.expiry_delta_max_secs = max.num_seconds();
            }
            ConfigChange::OptionPremiumRatio(ratio) => {
                validate_positive_ratio("option_premium_ratio", ratio)?;
                self.option_premium_ratio = ratio;
            }
            ConfigChange::ItmOptionPriceRatio(ratio) => {
                validate_positive_ratio("itm_option_price_ratio", ratio)?;
                self.itm_option_price_ratio = ratio;
            }
            ConfigChange::OptionPremiumDiscount(discount) => {
                validate_discount(discount)?;
                self.option_premium_discount = discount;
            }
            ConfigChange::MinChunkValue(value) => {
                validate_min_chunk(value)?;
                self.min_chunk_value = value;
            }
            ConfigChange::MaxOrderActive(duration) => {
                validate_max_order_active(duration.num_seconds())?;
                self.max_order_active_secs = duration.num_seconds();
            }
        }
        Ok(())
    }

    /// Lower strike bound as a fraction of spot.
    #[must_use]
    pub const fn strike_multiplier_min(&self) -> Decimal {
        self.strike_multiplier_min
    }

    /// Upper strike bound as a fraction of spot.
    #[must_use]
    pub const fn strike_multiplier_max(&self) -> Decimal {
        self.strike_multiplier_max
    }

    /// Minimum time-to-expiry for offered contracts.
    #[must_use]
    pub fn expiry_delta_min(&self) -> Duration {
        Duration::seconds(self.expiry_delta_min_secs)
    }

    /// Maximum time-to-expiry for offered contracts.
    #[must_use]
    pub fn expiry_delta_max(&self) -> Duration {
        Duration::seconds(self.expiry_delta_max_secs)
    }

    /// Premium ratio applied to order sizing.
    #[must_use]
    pub const fn option_premium_ratio(&self) -> Decimal {
        self.option_premium_ratio
    }

    /// Price ratio applied to in-the-money marks.
    #[must_use]
    pub const fn itm_option_price_ratio(&self) -> Decimal {
        self.itm_option_price_ratio
    }

    /// Premium discount applied to sizing.
    #[must_use]
    pub const fn option_premium_discount(&self) -> Decimal {
        self.option_premium_discount
    }

    /// Minimum deposit value that triggers auto-order creation.
    #[must_use]
    pub const fn min_chunk_value(&self) -> Amount {
        self.min_chunk_value
    }

    /// Duration after which any caller may cancel an order.
    #[must_use]
    pub fn max_order_active(&self) -> Duration {
        Duration::seconds(self.max_order_active_secs)
    }
}

fn invalid(reason: impl Into<String>) -> VaultError {
    VaultError::ConfigInvalid {
        reason: reason.into(),
    }
}

fn validate_strike_multiplier(min: Decimal, max: Decimal) -> Result<(), VaultError> {
    if min <= Decimal::ZERO {
        return Err(invalid("strike_multiplier.min must be positive"));
    }
    if max >= Decimal::ONE {
        return Err(invalid("strike_multiplier.max must be below 1"));
    }
    if min > max {
        return Err(invalid("strike_multiplier.min must not exceed max"));
    }
    Ok(())
}

fn validate_expiry_delta(min_secs: i64, max_secs: i64) -> Result<(), VaultError> {
    if min_secs <= 0 {
        return Err(invalid("expiry_delta.min must be positive"));
    }
    if min_secs >= max_secs {
        return Err(invalid("expiry_delta.min must be below max"));
    }
    Ok(())
}

fn validate_positive_ratio(field: &str, value: Decimal) -> Result<(), VaultError> {
    if value <= Decimal::ZERO {
        return Err(invalid(format!("{field} must be positive")));
    }
    Ok(())
}

fn validate_discount(value: Decimal) -> Result<(), VaultError> {
    if value < Decimal::ZERO || value >= Decimal::ONE {
        return Err(invalid("option_premium_discount must be in [0, 1)"));
    }
    Ok(())
}

fn validate_min_chunk(value: Amount) -> Result<(), VaultError> {
    if value.value() < Decimal::ZERO {
        return Err(invalid("min_chunk_value must not be negative"));
    }
    Ok(())
}

fn validate_max_order_active(secs: i64) -> Result<(), VaultError> {
    if secs <= 0 {
        return Err(invalid("max_order_active must be positive"));
    }
    Ok(())
}
