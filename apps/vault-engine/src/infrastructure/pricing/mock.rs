//! Mock pricing gateway for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{PricingError, PricingGatewayPort};
use crate::domain::shared::{Price, Timestamp};

/// Mock pricing gateway with settable spot and per-contract premiums.
#[derive(Debug)]
pub struct MockPricingGateway {
    spot: RwLock<Price>,
    premiums: RwLock<HashMap<(String, i64), Price>>,
    default_premium: RwLock<Option<Price>>,
}

impl MockPricingGateway {
    /// Create a gateway quoting `spot`.
    #[must_use]
    pub fn new(spot: Price) -> Self {
        Self {
            spot: RwLock::new(spot),
            premiums: RwLock::new(HashMap::new()),
            default_premium: RwLock::new(None),
        }
    }

    /// Update the spot quote.
    pub fn set_spot(&self, spot: Price) {
        *self.spot.write().expect("spot lock") = spot;
    }

    /// Set the premium quoted for a specific (strike, expiry) pair.
    pub fn set_premium(&self, strike: Price, expiry: Timestamp, premium: Price) {
        self.premiums
            .write()
            .expect("premiums lock")
            .insert(Self::key(strike, expiry), premium);
    }

    /// Set a fallback premium for contracts without a specific quote.
    pub fn set_default_premium(&self, premium: Price) {
        *self.default_premium.write().expect("default lock") = Some(premium);
    }

    fn key(strike: Price, expiry: Timestamp) -> (String, i64) {
        (strike.value().to_string(), expiry.unix_seconds())
    }
}

#[async_trait]
impl PricingGatewayPort for MockPricingGateway {
    async fn spot(&self) -> Result<Price, PricingError> {
        Ok(*self.spot.read().expect("spot lock"))
    }

    async fn premium(
        &self,
        strike: Price,
        expiry: Timestamp,
        _is_put: bool,
    ) -> Result<Price, PricingError> {
        if let Some(premium) = self
            .premiums
            .read()
            .expect("premiums lock")
            .get(&Self::key(strike, expiry))
        {
            return Ok(*premium);
        }
        self.default_premium
            .read()
            .expect("default lock")
            .ok_or_else(|| PricingError::QuoteUnavailable {
                strike: strike.to_string(),
                expiry: expiry.to_string(),
            })
    }
}
