//! Order sizing and validation policy.
//!
//! Pure functions: everything here is computed from arguments alone so the
//! policy is unit-testable without a live oracle.

use rust_decimal::Decimal;

use crate::domain::order_flow::value_objects::{
    BuyOrder, OptionContract, OrderWindow, VaultConfig,
};
use crate::domain::shared::value_objects::scale;
use crate::domain::shared::{Amount, AssetId, AssetKind, Price, Timestamp, VaultError};

/// Derive the acceptable strike/expiry window for a new buy order.
///
/// Strike bounds scale the spot price by the configured multipliers; expiry
/// bounds offset `now` by the configured deltas. Config validity is enforced
/// eagerly at mutation time, so the window ordering invariants hold whenever
/// the config does.
///
/// # Errors
///
/// Returns [`VaultError::PricingUnavailable`] for a non-positive spot quote.
pub fn derive_buy_window(
    spot: Price,
    config: &VaultConfig,
    now: Timestamp,
) -> Result<OrderWindow, VaultError> {
    if !spot.is_positive() {
        return Err(VaultError::PricingUnavailable {
            reason: format!("non-positive spot quote: {spot}"),
        });
    }

    Ok(OrderWindow::new(
        spot.scaled_by(config.strike_multiplier_min()),
        spot.scaled_by(config.strike_multiplier_max()),
        now.plus(config.expiry_delta_min()),
        now.plus(config.expiry_delta_max()),
    ))
}

/// Validate an offered option contract against an open buy order.
///
/// Checks run in priority order and the first failure is reported: the
/// option must be a put, its underlying/collateral/strike assets must match
/// the vault's wiring, its expiry must lie inside the order window, and its
/// strike must lie inside the order window. All bounds are inclusive.
///
/// # Errors
///
/// One of [`VaultError::OptionRightMismatch`], [`VaultError::AssetMismatch`],
/// [`VaultError::ExpiryOutOfRange`], or [`VaultError::StrikeOutOfRange`].
pub fn validate_candidate(
    option: &OptionContract,
    order: &BuyOrder,
    underlying_asset: &AssetId,
    quote_asset: &AssetId,
) -> Result<(), VaultError> {
    if !option.is_put() {
        return Err(VaultError::OptionRightMismatch);
    }

    check_asset(AssetKind::Underlying, underlying_asset, option.underlying())?;
    check_asset(AssetKind::Collateral, quote_asset, option.collateral())?;
    check_asset(AssetKind::Strike, quote_asset, option.strike_asset())?;

    let window = order.window();
    if !window.contains_expiry(option.expiry()) {
        return Err(VaultError::ExpiryOutOfRange {
            min: window.min_expiry(),
            max: window.max_expiry(),
            actual: option.expiry(),
        });
    }

    if !window.contains_strike(option.strike()) {
        return Err(VaultError::StrikeOutOfRange {
            min: window.min_strike(),
            max: window.max_strike(),
            actual: option.strike(),
        });
    }

    Ok(())
}

fn check_asset(kind: AssetKind, expected: &AssetId, actual: &AssetId) -> Result<(), VaultError> {
    if expected == actual {
        Ok(())
    } else {
        Err(VaultError::AssetMismatch {
            kind,
            expected: expected.clone(),
            actual: actual.clone(),
        })
    }
}

/// The option-token quantity whose proceeds at the discounted premium cover
/// `order_value` exactly.
///
/// `quantity = order_value / (premium * (1 + discount))`, computed at full
/// precision then truncated toward zero in the option token's native
/// precision.
///
/// # Errors
///
/// Returns [`VaultError::PricingUnavailable`] for a non-positive premium
/// quote.
pub fn required_option_amount(
    order_value: Amount,
    premium: Price,
    discount: Decimal,
    option_decimals: u32,
) -> Result<Amount, VaultError> {
    if !premium.is_positive() {
        return Err(VaultError::PricingUnavailable {
            reason: format!("non-positive premium quote: {premium}"),
        });
    }

    let unit_proceeds = premium.value() * (Decimal::ONE + discount);
    let quantity = order_value.value() / unit_proceeds;
    Ok(Amount::new(scale::truncate_to(quantity, option_decimals)))
}

/// Fail with [`VaultError::InsufficientOffer`] unless `offered` covers
/// `required`.
///
/// # Errors
///
/// Returns the structured shortfall when under-offered.
pub fn ensure_offer_covers(required: Amount, offered: Amount) -> Result<(), VaultError> {
    if offered < required {
        return Err(VaultError::InsufficientOffer { required, offered });
    }
    Ok(())
}
