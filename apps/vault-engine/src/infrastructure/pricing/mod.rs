//! Pricing gateway adapters.

mod mock;

pub use mock::MockPricingGateway;
