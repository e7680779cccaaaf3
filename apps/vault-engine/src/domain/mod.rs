//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Events**: Records of state transitions
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`order_flow`]: Buy/sell order lifecycle, sizing policy, configuration
//! - [`position`]: Open option positions held by the vault

pub mod order_flow;
pub mod position;
pub mod shared;
