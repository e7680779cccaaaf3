//! Domain errors for the vault engine.

use std::fmt;

use super::value_objects::{Amount, AssetId, Price, Role, Timestamp};

/// Which order slot an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// The vault-initiated put purchase order.
    Buy,
    /// The liquidator-initiated disposal order.
    Sell,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Which asset of an offered option failed to match the vault's wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// The asset the option is written on.
    Underlying,
    /// The asset backing the option writer's obligation.
    Collateral,
    /// The asset the strike is denominated in.
    Strike,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underlying => write!(f, "underlying"),
            Self::Collateral => write!(f, "collateral"),
            Self::Strike => write!(f, "strike"),
        }
    }
}

/// Errors surfaced by vault operations.
///
/// Every variant is local to a single operation: a failed operation leaves no
/// partial state change behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// The caller's resolved role does not carry the required capability.
    Unauthorized {
        /// Role the operation requires.
        required: Role,
        /// Role the caller actually resolved to.
        resolved: Role,
    },

    /// No order of this kind is currently active.
    OrderNotActive {
        /// Order slot that was empty.
        kind: OrderKind,
    },

    /// An order of this kind is already active.
    OrderAlreadyActive {
        /// Order slot that was occupied.
        kind: OrderKind,
    },

    /// The offered option is not a put.
    OptionRightMismatch,

    /// One of the offered option's assets does not match the vault's wiring.
    AssetMismatch {
        /// Which asset failed to match.
        kind: AssetKind,
        /// Asset the vault expects.
        expected: AssetId,
        /// Asset the option carries.
        actual: AssetId,
    },

    /// The offered option expires outside the order's window.
    ExpiryOutOfRange {
        /// Inclusive lower bound.
        min: Timestamp,
        /// Inclusive upper bound.
        max: Timestamp,
        /// The offending expiry.
        actual: Timestamp,
    },

    /// The offered option's strike lies outside the order's window.
    StrikeOutOfRange {
        /// Inclusive lower bound.
        min: Price,
        /// Inclusive upper bound.
        max: Price,
        /// The offending strike.
        actual: Price,
    },

    /// The caller offered fewer option tokens than the order requires.
    InsufficientOffer {
        /// Quantity needed to cover the order value.
        required: Amount,
        /// Quantity the caller offered.
        offered: Amount,
    },

    /// A sell request exceeds the vault's held balance of the option.
    InsufficientBalance {
        /// Quantity requested.
        requested: Amount,
        /// Quantity actually held.
        available: Amount,
    },

    /// The referenced option is not a current member of the position ledger.
    UnknownPosition {
        /// The unknown option series.
        option: AssetId,
    },

    /// A configuration value failed eager validation.
    ConfigInvalid {
        /// Why the value was rejected.
        reason: String,
    },

    /// An asset transfer failed; the enclosing operation was aborted.
    TransferFailed {
        /// Asset whose transfer failed.
        asset: AssetId,
        /// Failure detail from the transfer primitive.
        reason: String,
    },

    /// The pricing gateway could not produce a quote.
    PricingUnavailable {
        /// Failure detail from the gateway.
        reason: String,
    },

    /// The proportional-ownership accounting capability failed.
    AccountingUnavailable {
        /// Failure detail from the accounting capability.
        reason: String,
    },
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized { required, resolved } => {
                write!(f, "Caller resolved to {resolved}, operation requires {required}")
            }
            Self::OrderNotActive { kind } => {
                write!(f, "No active {kind} order")
            }
            Self::OrderAlreadyActive { kind } => {
                write!(f, "A {kind} order is already active")
            }
            Self::OptionRightMismatch => {
                write!(f, "Offered option is not a put")
            }
            Self::AssetMismatch {
                kind,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Option {kind} asset mismatch: expected {expected}, got {actual}"
                )
            }
            Self::ExpiryOutOfRange { min, max, actual } => {
                write!(f, "Expiry {actual} outside window [{min}, {max}]")
            }
            Self::StrikeOutOfRange { min, max, actual } => {
                write!(f, "Strike {actual} outside window [{min}, {max}]")
            }
            Self::InsufficientOffer { required, offered } => {
                write!(f, "Offer of {offered} option tokens below required {required}")
            }
            Self::InsufficientBalance {
                requested,
                available,
            } => {
                write!(f, "Requested {requested} exceeds held balance {available}")
            }
            Self::UnknownPosition { option } => {
                write!(f, "Option {option} is not a held position")
            }
            Self::ConfigInvalid { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::TransferFailed { asset, reason } => {
                write!(f, "Transfer of {asset} failed: {reason}")
            }
            Self::PricingUnavailable { reason } => {
                write!(f, "Pricing gateway unavailable: {reason}")
            }
            Self::AccountingUnavailable { reason } => {
                write!(f, "Share accounting unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for VaultError {}
