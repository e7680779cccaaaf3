// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Vault Engine - Rust Core Library
//!
//! Deterministic order lifecycle and locked-value accounting engine for a
//! single-asset put-option vault. Idle deposits become broker-mediated put
//! purchase orders; open positions are swept at expiry; every value query
//! splits the vault between redeemable and locked value.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, domain events)
//!   - `order_flow`: the vault aggregate, buy/sell order slots, sizing policy
//!   - `position`: the position ledger
//!   - `shared`: identifiers, price/amount, roles, decimal normalization
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: interfaces for external systems (`PricingGatewayPort`,
//!     `AssetTransferPort`, `SettlementPort`, ...)
//!   - `use_cases`: deposit, fill, cancel, sell, sweep, config update
//!   - `services`: the locked-value accountant behind the value queries
//!   - `dto`: snapshots for the query surface
//!
//! - **Infrastructure**: Adapters (in-memory pricing, transfer, settlement,
//!   and event-recording implementations)
//!
//! # Execution model
//!
//! Strictly single-threaded and transactional: callers serialize operations
//! against a vault instance, each operation applies fully or not at all, and
//! nothing inside the core schedules or polls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading.
pub mod config;

/// Tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::order_flow::{
    AssetWiring, BuyOrder, ConfigChange, ConfigField, OptionContract, OptionRight, OrderWindow,
    SellOrder, Vault, VaultConfig, VaultConfigParams, VaultEvent,
};
pub use domain::position::{Position, PositionLedger};
pub use domain::shared::{
    AccountId, Amount, AssetId, AssetKind, OrderKind, Price, Role, RoleRegistry, Timestamp,
    VaultError,
};

// Application re-exports
pub use application::dto::{
    BuyOrderSnapshot, PositionSnapshot, SellOrderSnapshot, VaultConfigSnapshot, VaultSnapshot,
};
pub use application::ports::{
    AssetTransferPort, EventPublisherPort, NoOpEventPublisher, PricingGatewayPort, RedeemOutcome,
    SettlementPort, ShareAccountingPort,
};
pub use application::services::LockedValueAccountant;
pub use application::use_cases::{
    CancelOrderUseCase, CreateSellOrderUseCase, DepositUseCase, FillBuyOrderUseCase, FillResult,
    SweepExpiredUseCase, SweepReport, UpdateConfigUseCase,
};

// Infrastructure re-exports
pub use infrastructure::events::RecordingEventPublisher;
pub use infrastructure::pricing::MockPricingGateway;
pub use infrastructure::settlement::MockSettlement;
pub use infrastructure::transfer::InMemoryAssetLedger;
