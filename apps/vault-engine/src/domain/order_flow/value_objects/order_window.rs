//! Acceptable strike/expiry window for a buy order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Price, Timestamp};

/// The strike and expiry bounds an offered option must satisfy.
///
/// Both ranges are inclusive at both ends. Construction is owned by the order
/// policy, which guarantees `min_strike < max_strike` and
/// `min_expiry < max_expiry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWindow {
    min_strike: Price,
    max_strike: Price,
    min_expiry: Timestamp,
    max_expiry: Timestamp,
}

impl OrderWindow {
    /// Create a window from its bounds.
    #[must_use]
    pub const fn new(
        min_strike: Price,
        max_strike: Price,
        min_expiry: Timestamp,
        max_expiry: Timestamp,
    ) -> Self {
        Self {
            min_strike,
            max_strike,
            min_expiry,
            max_expiry,
        }
    }

    /// Lower strike bound.
    #[must_use]
    pub const fn min_strike(&self) -> Price {
        self.min_strike
    }

    /// Upper strike bound.
    #[must_use]
    pub const fn max_strike(&self) -> Price {
        self.max_strike
    }

    /// Earliest acceptable expiry.
    #[must_use]
    pub const fn min_expiry(&self) -> Timestamp {
        self.min_expiry
    }

    /// Latest acceptable expiry.
    #[must_use]
    pub const fn max_expiry(&self) -> Timestamp {
        self.max_expiry
    }

    /// Whether `strike` lies within the inclusive strike bounds.
    #[must_use]
    pub fn contains_strike(&self, strike: Price) -> bool {
        strike >= self.min_strike && strike <= self.max_strike
    }

    /// Whether `expiry` lies within the inclusive expiry bounds.
    #[must_use]
    pub fn contains_expiry(&self, expiry: Timestamp) -> bool {
        expiry >= self.min_expiry && expiry <= self.max_expiry
    }
}
