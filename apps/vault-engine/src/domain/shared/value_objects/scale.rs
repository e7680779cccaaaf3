//! Cross-asset decimal normalization.
//!
//! The vault moves value between assets quoted at different native precisions
//! (quote token, option token, pricer output). Every conversion goes through
//! this module so truncation behavior is decided in exactly one place.

use rust_decimal::Decimal;

/// Truncate `value` toward zero at `decimals` fractional digits.
///
/// This is the only lossy step in any cross-asset conversion: digits beyond
/// the target precision are dropped, never rounded up.
#[must_use]
pub fn truncate_to(value: Decimal, decimals: u32) -> Decimal {
    value.trunc_with_scale(decimals)
}

/// Re-express a value quantized at `source_decimals` in an asset with
/// `target_decimals` of native precision.
///
/// The numeric value is preserved when the target is at least as fine as the
/// source; a coarser target truncates toward zero.
#[must_use]
pub fn normalize(value: Decimal, source_decimals: u32, target_decimals: u32) -> Decimal {
    let at_source = truncate_to(value, source_decimals);
    if target_decimals >= source_decimals {
        at_source
    } else {
        truncate_to(at_source, target_decimals)
    }
}
