//! Vault Aggregate Root
//!
//! The vault owns the single buy-order and sell-order slots, the position
//! ledger, and the configuration. Every mutation runs through a method here,
//! validates before touching state, and records a domain event, so a failed
//! operation leaves no partial state change behind.

use serde::{Deserialize, Serialize};

use crate::domain::order_flow::events::{
    BuyOrderCancelled, BuyOrderCreated, BuyOrderFilled, ConfigUpdated, OptionRedeemed,
    SellOrderCancelled, SellOrderCreated, VaultEvent,
};
use crate::domain::order_flow::services::order_policy;
use crate::domain::order_flow::value_objects::{
    BuyOrder, ConfigChange, OptionContract, SellOrder, VaultConfig,
};
use crate::domain::position::{Position, PositionLedger};
use crate::domain::shared::{
    AccountId, Amount, AssetId, OrderKind, Price, Role, RoleRegistry, Timestamp, VaultError,
};

/// The asset wiring of one vault instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetWiring {
    /// Asset the purchased puts are written on.
    pub underlying: AssetId,
    /// Quote asset deposits arrive in; also the collateral and strike asset.
    pub quote: AssetId,
    /// Native precision of the quote asset.
    pub quote_decimals: u32,
    /// Account holding the vault's token balances.
    pub custody: AccountId,
}

/// Vault Aggregate Root.
///
/// Single-threaded by construction: callers serialize operations, so no
/// internal locking exists and each method observes the fully-applied effects
/// of all prior operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    assets: AssetWiring,
    roles: RoleRegistry,
    config: VaultConfig,
    buy_order: Option<BuyOrder>,
    sell_order: Option<SellOrder>,
    positions: PositionLedger,
    #[serde(skip)]
    events: Vec<VaultEvent>,
}

impl Vault {
    /// Create a vault with no open orders or positions.
    #[must_use]
    pub const fn new(assets: AssetWiring, roles: RoleRegistry, config: VaultConfig) -> Self {
        Self {
            assets,
            roles,
            config,
            buy_order: None,
            sell_order: None,
            positions: PositionLedger::new(),
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The vault's asset wiring.
    #[must_use]
    pub const fn assets(&self) -> &AssetWiring {
        &self.assets
    }

    /// The capability registry.
    #[must_use]
    pub const fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// The active buy order, if any.
    #[must_use]
    pub const fn buy_order(&self) -> Option<&BuyOrder> {
        self.buy_order.as_ref()
    }

    /// The active sell order, if any.
    #[must_use]
    pub const fn sell_order(&self) -> Option<&SellOrder> {
        self.sell_order.as_ref()
    }

    /// Open positions.
    #[must_use]
    pub const fn positions(&self) -> &PositionLedger {
        &self.positions
    }

    /// Resolve the role held by `caller`.
    #[must_use]
    pub fn resolve_role(&self, caller: &AccountId) -> Role {
        self.roles.resolve(caller)
    }

    /// Drain events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<VaultEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // Buy-order lifecycle
    // ========================================================================

    /// Activate a buy order sized to `deposit_value` at the current spot.
    ///
    /// A deposit below the configured chunk threshold is a deliberate no-op
    /// and returns `Ok(None)` without creating anything.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderAlreadyActive`] if a buy order is active, or a
    /// window-derivation failure from the policy.
    pub fn create_buy_order(
        &mut self,
        deposit_value: Amount,
        spot: Price,
        now: Timestamp,
    ) -> Result<Option<&BuyOrder>, VaultError> {
        if deposit_value < self.config.min_chunk_value() {
            return Ok(None);
        }
        if self.buy_order.is_some() {
            return Err(VaultError::OrderAlreadyActive {
                kind: OrderKind::Buy,
            });
        }

        let window = order_policy::derive_buy_window(spot, &self.config, now)?;
        let order = BuyOrder::new(deposit_value, window, now);

        self.events.push(VaultEvent::BuyOrderCreated(BuyOrderCreated {
            window,
            amount: deposit_value,
            occurred_at: now,
        }));
        Ok(Some(self.buy_order.insert(order)))
    }

    /// Validate an offered contract against the active buy order.
    ///
    /// Read-only: run by the fill path before any external call.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] with no active buy order, otherwise the
    /// policy's first failing check.
    pub fn validate_fill_candidate(&self, option: &OptionContract) -> Result<&BuyOrder, VaultError> {
        let order = self.buy_order.as_ref().ok_or(VaultError::OrderNotActive {
            kind: OrderKind::Buy,
        })?;
        order_policy::validate_candidate(
            option,
            order,
            &self.assets.underlying,
            &self.assets.quote,
        )?;
        Ok(order)
    }

    /// Record a completed fill: deactivate the buy order and add the
    /// position.
    ///
    /// Token movement happens outside the aggregate; this is called only
    /// after both transfers succeeded. This is the sole path that creates a
    /// position.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] with no active buy order.
    pub fn apply_buy_fill(
        &mut self,
        option: OptionContract,
        amount: Amount,
        now: Timestamp,
    ) -> Result<BuyOrder, VaultError> {
        let order = self.buy_order.take().ok_or(VaultError::OrderNotActive {
            kind: OrderKind::Buy,
        })?;

        let series = option.series().clone();
        self.positions.add(option, amount, now);
        self.events.push(VaultEvent::BuyOrderFilled(BuyOrderFilled {
            option: series,
            amount,
            occurred_at: now,
        }));
        Ok(order)
    }

    /// Cancel the active buy order.
    ///
    /// The broker may always cancel; any other caller only once the order is
    /// stale, so a non-responsive broker cannot strand owner funds.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] or [`VaultError::Unauthorized`].
    pub fn cancel_buy_order(
        &mut self,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<BuyOrder, VaultError> {
        let order = self.buy_order.as_ref().ok_or(VaultError::OrderNotActive {
            kind: OrderKind::Buy,
        })?;

        match self.roles.resolve(caller) {
            Role::Broker => {}
            resolved => {
                if !order.is_stale(now, self.config.max_order_active()) {
                    return Err(VaultError::Unauthorized {
                        required: Role::Broker,
                        resolved,
                    });
                }
            }
        }

        let order = self
            .buy_order
            .take()
            .ok_or(VaultError::OrderNotActive {
                kind: OrderKind::Buy,
            })?;
        self.events
            .push(VaultEvent::BuyOrderCancelled(BuyOrderCancelled {
                window: *order.window(),
                amount: order.underlying_amount(),
                occurred_at: now,
            }));
        Ok(order)
    }

    // ========================================================================
    // Sell-order lifecycle
    // ========================================================================

    /// Activate a sell order against a held position.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-liquidators,
    /// [`VaultError::OrderAlreadyActive`] with an active sell order,
    /// [`VaultError::UnknownPosition`] if the option is not held, or
    /// [`VaultError::InsufficientBalance`] if `amount` exceeds the held
    /// balance.
    pub fn create_sell_order(
        &mut self,
        caller: &AccountId,
        option: &AssetId,
        amount: Amount,
        now: Timestamp,
    ) -> Result<&SellOrder, VaultError> {
        match self.roles.resolve(caller) {
            Role::Liquidator => {}
            resolved => {
                return Err(VaultError::Unauthorized {
                    required: Role::Liquidator,
                    resolved,
                });
            }
        }
        if self.sell_order.is_some() {
            return Err(VaultError::OrderAlreadyActive {
                kind: OrderKind::Sell,
            });
        }
        if !self.positions.contains(option) {
            return Err(VaultError::UnknownPosition {
                option: option.clone(),
            });
        }
        let available = self.positions.balance_of(option);
        if amount > available {
            return Err(VaultError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        let order = SellOrder::new(option.clone(), amount, now);
        self.events.push(VaultEvent::SellOrderCreated(SellOrderCreated {
            option: option.clone(),
            amount,
            occurred_at: now,
        }));
        Ok(self.sell_order.insert(order))
    }

    /// Cancel the active sell order.
    ///
    /// The liquidator may always cancel; any other caller only once the
    /// order is stale.
    ///
    /// # Errors
    ///
    /// [`VaultError::OrderNotActive`] or [`VaultError::Unauthorized`].
    pub fn cancel_sell_order(
        &mut self,
        caller: &AccountId,
        now: Timestamp,
    ) -> Result<SellOrder, VaultError> {
        let order = self.sell_order.as_ref().ok_or(VaultError::OrderNotActive {
            kind: OrderKind::Sell,
        })?;

        match self.roles.resolve(caller) {
            Role::Liquidator => {}
            resolved => {
                if !order.is_stale(now, self.config.max_order_active()) {
                    return Err(VaultError::Unauthorized {
                        required: Role::Liquidator,
                        resolved,
                    });
                }
            }
        }

        let order = self
            .sell_order
            .take()
            .ok_or(VaultError::OrderNotActive {
                kind: OrderKind::Sell,
            })?;
        self.events
            .push(VaultEvent::SellOrderCancelled(SellOrderCancelled {
                option: order.option().clone(),
                amount: order.amount(),
                occurred_at: now,
            }));
        Ok(order)
    }

    // ========================================================================
    // Sweep support
    // ========================================================================

    /// Remove a settled position, cancelling a sell order that references it.
    ///
    /// # Errors
    ///
    /// [`VaultError::UnknownPosition`] if the option is not held.
    pub fn apply_redemption(
        &mut self,
        option: &AssetId,
        now: Timestamp,
    ) -> Result<Position, VaultError> {
        let position = self
            .positions
            .remove(option)
            .ok_or(VaultError::UnknownPosition {
                option: option.clone(),
            })?;

        self.events.push(VaultEvent::OptionRedeemed(OptionRedeemed {
            option: option.clone(),
            occurred_at: now,
        }));

        // A sell order must always reference a held position; drop it along
        // with the position it pointed at.
        if let Some(order) = self.sell_order.take_if(|order| order.option() == option) {
            self.events
                .push(VaultEvent::SellOrderCancelled(SellOrderCancelled {
                    option: order.option().clone(),
                    amount: order.amount(),
                    occurred_at: now,
                }));
        }

        Ok(position)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Apply a controller-initiated configuration change.
    ///
    /// Validation is eager: an invalid value is rejected here and never
    /// stored.
    ///
    /// # Errors
    ///
    /// [`VaultError::Unauthorized`] for non-controllers or
    /// [`VaultError::ConfigInvalid`] from field validation.
    pub fn update_config(
        &mut self,
        caller: &AccountId,
        change: ConfigChange,
        now: Timestamp,
    ) -> Result<(), VaultError> {
        match self.roles.resolve(caller) {
            Role::Controller => {}
            resolved => {
                return Err(VaultError::Unauthorized {
                    required: Role::Controller,
                    resolved,
                });
            }
        }

        let field = change.field();
        self.config.apply(change)?;
        self.events.push(VaultEvent::ConfigUpdated(ConfigUpdated {
            field,
            occurred_at: now,
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    use crate::domain::order_flow::value_objects::VaultConfigParams;

    fn wiring() -> AssetWiring {
        AssetWiring {
            underlying: AssetId::new("wbtc"),
            quote: AssetId::new("usdc"),
            quote_decimals: 6,
            custody: AccountId::new("vault"),
        }
    }

    fn roles() -> RoleRegistry {
        RoleRegistry::new(
            AccountId::new("owner"),
            AccountId::new("broker"),
            AccountId::new("liquidator"),
            AccountId::new("controller"),
        )
    }

    fn config() -> VaultConfig {
        VaultConfig::new(VaultConfigParams {
            strike_multiplier_min: dec!(0.5),
            strike_multiplier_max: dec!(0.95),
            expiry_delta_min_secs: 2_000_000,
            expiry_delta_max_secs: 5_000_000,
            option_premium_ratio: dec!(0.02),
            itm_option_price_ratio: dec!(0.99),
            option_premium_discount: dec!(0),
            min_chunk_value: Amount::from_i64(100),
            max_order_active_secs: 86_400,
        })
        .unwrap()
    }

    fn vault() -> Vault {
        Vault::new(wiring(), roles(), config())
    }

    fn t(secs: i64) -> Timestamp {
        Timestamp::from_unix_seconds(secs)
    }

    fn held_put(vault: &mut Vault, series: &str, balance: i64) -> AssetId {
        let contract = OptionContract::put(
            AssetId::new(series),
            AssetId::new("wbtc"),
            AssetId::new("usdc"),
            AssetId::new("usdc"),
            Price::from_i64(800),
            t(4_000_000),
        );
        vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(0))
            .unwrap();
        vault
            .apply_buy_fill(contract, Amount::from_i64(balance), t(1))
            .unwrap();
        vault.drain_events();
        AssetId::new(series)
    }

    #[test]
    fn small_deposit_is_a_no_op() {
        let mut vault = vault();
        let created = vault
            .create_buy_order(Amount::from_i64(99), Price::from_i64(1000), t(0))
            .unwrap();
        assert!(created.is_none());
        assert!(vault.buy_order().is_none());
        assert!(vault.drain_events().is_empty());
    }

    #[test]
    fn qualifying_deposit_creates_order_with_window() {
        let mut vault = vault();
        vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(0))
            .unwrap();

        let order = vault.buy_order().unwrap();
        assert_eq!(order.underlying_amount(), Amount::from_i64(1000));
        assert_eq!(order.window().min_strike(), Price::from_i64(500));
        assert_eq!(order.window().min_expiry(), t(2_000_000));
        assert_eq!(order.window().max_expiry(), t(5_000_000));

        let events = vault.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "BUY_ORDER_CREATED");
    }

    #[test]
    fn second_buy_order_rejected_while_active() {
        let mut vault = vault();
        vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(0))
            .unwrap();
        let err = vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(1))
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::OrderAlreadyActive {
                kind: OrderKind::Buy
            }
        );
    }

    #[test]
    fn fill_deactivates_order_and_adds_position() {
        let mut vault = vault();
        let series = held_put(&mut vault, "wbtc-put-a", 3);
        assert!(vault.buy_order().is_none());
        assert!(vault.positions().contains(&series));
        assert_eq!(vault.positions().balance_of(&series), Amount::from_i64(3));
    }

    #[test]
    fn broker_cancels_fresh_buy_order() {
        let mut vault = vault();
        vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(0))
            .unwrap();
        vault.drain_events();

        vault.cancel_buy_order(&AccountId::new("broker"), t(10)).unwrap();
        assert!(vault.buy_order().is_none());
        let events = vault.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "BUY_ORDER_CANCELLED");
    }

    #[test]
    fn unprivileged_cancel_gated_by_staleness() {
        let mut vault = vault();
        vault
            .create_buy_order(Amount::from_i64(1000), Price::from_i64(1000), t(0))
            .unwrap();

        // One second before the deadline: still broker-only.
        let err = vault
            .cancel_buy_order(&AccountId::new("anyone"), t(86_399))
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::Unauthorized {
                required: Role::Broker,
                resolved: Role::Caller,
            }
        );

        // Past the deadline: any caller may force-cancel.
        vault
            .cancel_buy_order(&AccountId::new("anyone"), t(86_401))
            .unwrap();
        assert!(vault.buy_order().is_none());
    }

    #[test]
    fn cancel_without_active_order_fails() {
        let mut vault = vault();
        let err = vault
            .cancel_buy_order(&AccountId::new("broker"), t(0))
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::OrderNotActive {
                kind: OrderKind::Buy
            }
        );
    }

    #[test]
    fn sell_order_requires_liquidator() {
        let mut vault = vault();
        let series = held_put(&mut vault, "wbtc-put-a", 3);
        let err = vault
            .create_sell_order(&AccountId::new("owner"), &series, Amount::from_i64(1), t(2))
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::Unauthorized {
                required: Role::Liquidator,
                resolved: Role::Owner,
            }
        );
    }

    #[test]
    fn sell_order_requires_held_position() {
        let mut vault = vault();
        let err = vault
            .create_sell_order(
                &AccountId::new("liquidator"),
                &AssetId::new("ghost"),
                Amount::from_i64(1),
                t(2),
            )
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::UnknownPosition {
                option: AssetId::new("ghost")
            }
        );
    }

    #[test]
    fn sell_order_bounded_by_held_balance() {
        let mut vault = vault();
        let series = held_put(&mut vault, "wbtc-put-a", 3);
        let err = vault
            .create_sell_order(
                &AccountId::new("liquidator"),
                &series,
                Amount::from_i64(4),
                t(2),
            )
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::InsufficientBalance {
                requested: Amount::from_i64(4),
                available: Amount::from_i64(3),
            }
        );

        vault
            .create_sell_order(&AccountId::new("liquidator"), &series, Amount::from_i64(3), t(2))
            .unwrap();
        assert!(vault.sell_order().is_some());
    }

    #[test]
    fn stale_sell_order_cancellable_by_anyone() {
        let mut vault = vault();
        let series = held_put(&mut vault, "wbtc-put-a", 3);
        vault
            .create_sell_order(&AccountId::new("liquidator"), &series, Amount::from_i64(1), t(2))
            .unwrap();

        let err = vault
            .cancel_sell_order(&AccountId::new("anyone"), t(100))
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::Unauthorized {
                required: Role::Liquidator,
                resolved: Role::Caller,
            }
        );

        vault
            .cancel_sell_order(&AccountId::new("anyone"), t(2 + 86_400))
            .unwrap();
        assert!(vault.sell_order().is_none());
    }

    #[test]
    fn redemption_removes_position_and_linked_sell_order() {
        let mut vault = vault();
        let series = held_put(&mut vault, "wbtc-put-a", 3);
        vault
            .create_sell_order(&AccountId::new("liquidator"), &series, Amount::from_i64(2), t(2))
            .unwrap();
        vault.drain_events();

        let position = vault.apply_redemption(&series, t(3)).unwrap();
        assert_eq!(position.balance(), Amount::from_i64(3));
        assert!(vault.positions().is_empty());
        assert!(vault.sell_order().is_none());

        let events = vault.drain_events();
        let types: Vec<&str> = events.iter().map(VaultEvent::event_type).collect();
        assert_eq!(types, vec!["OPTION_REDEEMED", "SELL_ORDER_CANCELLED"]);
    }

    #[test]
    fn redemption_leaves_unrelated_sell_order_active() {
        let mut vault = vault();
        let series_a = held_put(&mut vault, "wbtc-put-a", 3);
        // Add a second position directly through another full cycle.
        let contract_b = OptionContract::put(
            AssetId::new("wbtc-put-b"),
            AssetId::new("wbtc"),
            AssetId::new("usdc"),
            AssetId::new("usdc"),
            Price::from_i64(700),
            t(4_500_000),
        );
        vault
            .create_buy_order(Amount::from_i64(500), Price::from_i64(1000), t(5))
            .unwrap();
        vault
            .apply_buy_fill(contract_b, Amount::from_i64(2), t(6))
            .unwrap();
        vault
            .create_sell_order(
                &AccountId::new("liquidator"),
                &AssetId::new("wbtc-put-b"),
                Amount::from_i64(1),
                t(7),
            )
            .unwrap();
        vault.drain_events();

        vault.apply_redemption(&series_a, t(8)).unwrap();
        assert!(vault.sell_order().is_some());
        let events = vault.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "OPTION_REDEEMED");
    }

    #[test]
    fn controller_updates_config_with_event() {
        let mut vault = vault();
        vault
            .update_config(
                &AccountId::new("controller"),
                ConfigChange::MaxOrderActive(Duration::seconds(3600)),
                t(1),
            )
            .unwrap();
        assert_eq!(vault.config().max_order_active(), Duration::seconds(3600));
        let events = vault.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "CONFIG_UPDATED");
    }

    #[test]
    fn non_controller_config_update_rejected() {
        let mut vault = vault();
        let err = vault
            .update_config(
                &AccountId::new("broker"),
                ConfigChange::OptionPremiumDiscount(dec!(0.1)),
                t(1),
            )
            .unwrap_err();
        assert_eq!(
            err,
            VaultError::Unauthorized {
                required: Role::Controller,
                resolved: Role::Broker,
            }
        );
        assert_eq!(vault.config().option_premium_discount(), dec!(0));
    }

    #[test]
    fn invalid_config_update_emits_no_event() {
        let mut vault = vault();
        let err = vault.update_config(
            &AccountId::new("controller"),
            ConfigChange::StrikeMultiplier {
                min: dec!(0.9),
                max: dec!(0.5),
            },
            t(1),
        );
        assert!(err.is_err());
        assert!(vault.drain_events().is_empty());
    }
}
