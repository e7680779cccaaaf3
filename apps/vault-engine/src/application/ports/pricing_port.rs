//! Pricing Gateway Port (Driven Port)
//!
//! Interface to the external premium/spot oracle. Both queries are made at
//! decision time, never cached, because they drive sizing and validation.

use async_trait::async_trait;

use crate::domain::shared::{Price, Timestamp};

/// Pricing gateway error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    /// Gateway connection error.
    #[error("Pricing gateway connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// No quote available for the requested contract.
    #[error("No quote for strike {strike} expiring {expiry}")]
    QuoteUnavailable {
        /// Requested strike.
        strike: String,
        /// Requested expiry.
        expiry: String,
    },
}

/// Port for querying the external option-pricing oracle.
#[async_trait]
pub trait PricingGatewayPort: Send + Sync {
    /// Current spot price of the vault's underlying in quote terms.
    async fn spot(&self) -> Result<Price, PricingError>;

    /// Premium quote for one unit of the given contract.
    async fn premium(
        &self,
        strike: Price,
        expiry: Timestamp,
        is_put: bool,
    ) -> Result<Price, PricingError>;
}
