//! Capability roles and their resolution from caller accounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::identifiers::AccountId;

/// Capability held by the account invoking a vault operation.
///
/// Resolved once at the top of each operation and checked by exhaustive
/// matching. `Caller` is every account with no named capability; such callers
/// may still force-cancel stale orders and trigger the expiry sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// The vault owner (sole depositor and withdrawer).
    Owner,
    /// The off-chain counterparty that fills and cancels buy orders.
    Broker,
    /// The party that creates and cancels sell orders.
    Liquidator,
    /// The party that mutates vault configuration.
    Controller,
    /// Any other account.
    Caller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "OWNER"),
            Self::Broker => write!(f, "BROKER"),
            Self::Liquidator => write!(f, "LIQUIDATOR"),
            Self::Controller => write!(f, "CONTROLLER"),
            Self::Caller => write!(f, "CALLER"),
        }
    }
}

/// The accounts holding each named capability for one vault instance.
///
/// Capabilities are address-based and mutually exclusive: resolution checks
/// owner, broker, liquidator, then controller, and distinct accounts are
/// expected per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    owner: AccountId,
    broker: AccountId,
    liquidator: AccountId,
    controller: AccountId,
}

impl RoleRegistry {
    /// Create a registry from the four capability accounts.
    #[must_use]
    pub const fn new(
        owner: AccountId,
        broker: AccountId,
        liquidator: AccountId,
        controller: AccountId,
    ) -> Self {
        Self {
            owner,
            broker,
            liquidator,
            controller,
        }
    }

    /// Resolve the role held by `account`.
    #[must_use]
    pub fn resolve(&self, account: &AccountId) -> Role {
        if account == &self.owner {
            Role::Owner
        } else if account == &self.broker {
            Role::Broker
        } else if account == &self.liquidator {
            Role::Liquidator
        } else if account == &self.controller {
            Role::Controller
        } else {
            Role::Caller
        }
    }

    /// The owner account.
    #[must_use]
    pub const fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// The broker account.
    #[must_use]
    pub const fn broker(&self) -> &AccountId {
        &self.broker
    }

    /// The liquidator account.
    #[must_use]
    pub const fn liquidator(&self) -> &AccountId {
        &self.liquidator
    }

    /// The controller account.
    #[must_use]
    pub const fn controller(&self) -> &AccountId {
        &self.controller
    }
}
