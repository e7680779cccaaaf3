//! E2E Integration Tests for the Vault Order Lifecycle
//!
//! Drives the full deposit → fill → sweep flow through the use cases over
//! the in-memory infrastructure adapters, asserting exact token movement and
//! event emission.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::Duration;
use rust_decimal_macros::dec;

use vault_engine::{
    AccountId, Amount, AssetId, AssetWiring, CancelOrderUseCase, CreateSellOrderUseCase,
    DepositUseCase, FillBuyOrderUseCase, InMemoryAssetLedger, MockPricingGateway, MockSettlement,
    OptionContract, Price, RecordingEventPublisher, RoleRegistry, SweepExpiredUseCase, Timestamp,
    UpdateConfigUseCase, Vault, VaultConfig, VaultConfigParams, VaultError, VaultSnapshot,
};

const OWNER: &str = "owner-acct";
const BROKER: &str = "broker-acct";
const LIQUIDATOR: &str = "liquidator-acct";
const CONTROLLER: &str = "controller-acct";
const CUSTODY: &str = "vault-custody";

struct Harness {
    vault: Vault,
    pricing: Arc<MockPricingGateway>,
    ledger: Arc<InMemoryAssetLedger>,
    settlement: Arc<MockSettlement>,
    publisher: Arc<RecordingEventPublisher>,
}

impl Harness {
    fn new() -> Self {
        let config = VaultConfig::new(VaultConfigParams {
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
        .unwrap();

        let vault = Vault::new(
            AssetWiring {
                underlying: AssetId::new("wbtc"),
                quote: AssetId::new("usdc"),
                quote_decimals: 6,
                custody: AccountId::new(CUSTODY),
            },
            RoleRegistry::new(
                AccountId::new(OWNER),
                AccountId::new(BROKER),
                AccountId::new(LIQUIDATOR),
                AccountId::new(CONTROLLER),
            ),
            config,
        );

        Self {
            vault,
            pricing: Arc::new(MockPricingGateway::new(Price::from_i64(1000))),
            ledger: Arc::new(InMemoryAssetLedger::new()),
            settlement: Arc::new(MockSettlement::new()),
            publisher: Arc::new(RecordingEventPublisher::new()),
        }
    }

    fn deposit_use_case(&self) -> DepositUseCase<MockPricingGateway, RecordingEventPublisher> {
        DepositUseCase::new(Arc::clone(&self.pricing), Arc::clone(&self.publisher))
    }

    fn fill_use_case(
        &self,
    ) -> FillBuyOrderUseCase<MockPricingGateway, InMemoryAssetLedger, RecordingEventPublisher>
    {
        FillBuyOrderUseCase::new(
            Arc::clone(&self.pricing),
            Arc::clone(&self.ledger),
            Arc::clone(&self.publisher),
        )
    }

    fn sweep_use_case(&self) -> SweepExpiredUseCase<MockSettlement, RecordingEventPublisher> {
        SweepExpiredUseCase::new(Arc::clone(&self.settlement), Arc::clone(&self.publisher))
    }

    /// A put series inside the active order's window, quoted at `premium`.
    fn quoted_put(&self, series: &str, strike: i64, premium: i64) -> OptionContract {
        let expiry = Timestamp::now().plus(Duration::seconds(3_000_000));
        let contract = OptionContract::put(
            AssetId::new(series),
            AssetId::new("wbtc"),
            AssetId::new("usdc"),
            AssetId::new("usdc"),
            Price::from_i64(strike),
            expiry,
        );
        self.pricing
            .set_premium(Price::from_i64(strike), expiry, Price::from_i64(premium));
        contract
    }
}

#[tokio::test]
async fn deposit_creates_sized_buy_order() {
    let mut h = Harness::new();
    let deposit = h.deposit_use_case();

    let order = deposit
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(1000))
        .await
        .unwrap()
        .expect("order created");

    assert_eq!(order.underlying_amount, Amount::from_i64(1000));
    assert_eq!(order.min_strike, Price::from_i64(500));
    assert_eq!(order.max_strike, Price::new(dec!(950.00)));
    assert_eq!(h.publisher.event_types(), vec!["BUY_ORDER_CREATED"]);
}

#[tokio::test]
async fn small_deposit_creates_nothing() {
    let mut h = Harness::new();
    let deposit = h.deposit_use_case();

    let order = deposit
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(99))
        .await
        .unwrap();

    assert!(order.is_none());
    assert!(h.vault.buy_order().is_none());
    assert!(h.publisher.events().is_empty());
}

#[tokio::test]
async fn non_owner_deposit_rejected() {
    let mut h = Harness::new();
    let deposit = h.deposit_use_case();

    let err = deposit
        .deposit(&mut h.vault, &AccountId::new(BROKER), Amount::from_i64(1000))
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized { .. }));
}

#[tokio::test]
async fn under_offered_fill_reports_required_amount() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
        .await
        .unwrap();

    let contract = h.quoted_put("wbtc-put-a", 800, 147);
    let err = h
        .fill_use_case()
        .fill(
            &mut h.vault,
            &AccountId::new(BROKER),
            contract,
            Amount::from_i64(1),
        )
        .await
        .unwrap_err();

    // 560 / 147 = 3.80952380952..., truncated at 8 decimals.
    assert_eq!(
        err,
        VaultError::InsufficientOffer {
            required: Amount::new(dec!(3.80952380)),
            offered: Amount::from_i64(1),
        }
    );
    // A failed fill leaves the order active and moves nothing.
    assert!(h.vault.buy_order().is_some());
    assert_eq!(
        h.ledger
            .balance_of(&AssetId::new("wbtc-put-a"), &AccountId::new(CUSTODY)),
        Amount::ZERO
    );
}

#[tokio::test]
async fn fill_moves_exact_amounts_both_ways() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
        .await
        .unwrap();

    let contract = h.quoted_put("wbtc-put-a", 800, 147);
    let series = AssetId::new("wbtc-put-a");
    let broker = AccountId::new(BROKER);
    let custody = AccountId::new(CUSTODY);

    // Broker holds 10 tokens but only the required quantity may move.
    h.ledger.mint(&series, &broker, Amount::from_i64(10));
    h.ledger
        .mint(&AssetId::new("usdc"), &custody, Amount::from_i64(560));

    let result = h
        .fill_use_case()
        .fill(&mut h.vault, &broker, contract, Amount::from_i64(10))
        .await
        .unwrap();

    let required = Amount::new(dec!(3.80952380));
    assert_eq!(result.amount, required);
    assert_eq!(result.spent, Amount::from_i64(560));

    // Exactly the required tokens moved in; exactly the reserved quote out.
    assert_eq!(h.ledger.balance_of(&series, &custody), required);
    assert_eq!(
        h.ledger.balance_of(&series, &broker),
        Amount::from_i64(10) - required
    );
    assert_eq!(
        h.ledger.balance_of(&AssetId::new("usdc"), &broker),
        Amount::from_i64(560)
    );
    assert_eq!(
        h.ledger.balance_of(&AssetId::new("usdc"), &custody),
        Amount::ZERO
    );

    // Order slot is free again and the position is on the books.
    assert!(h.vault.buy_order().is_none());
    assert_eq!(h.vault.positions().balance_of(&series), required);
    assert_eq!(
        h.publisher.event_types(),
        vec!["BUY_ORDER_CREATED", "BUY_ORDER_FILLED"]
    );
}

#[tokio::test]
async fn fill_with_empty_vault_unwinds_option_leg() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
        .await
        .unwrap();

    let contract = h.quoted_put("wbtc-put-a", 800, 147);
    let series = AssetId::new("wbtc-put-a");
    let broker = AccountId::new(BROKER);

    // Broker funded, custody NOT funded: the quote leg must fail.
    h.ledger.mint(&series, &broker, Amount::from_i64(10));

    let err = h
        .fill_use_case()
        .fill(&mut h.vault, &broker, contract, Amount::from_i64(10))
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::TransferFailed { .. }));

    // The option leg was unwound; no partial exchange survives.
    assert_eq!(h.ledger.balance_of(&series, &broker), Amount::from_i64(10));
    assert!(h.vault.buy_order().is_some());
    assert!(h.vault.positions().is_empty());
}

#[tokio::test]
async fn non_broker_fill_rejected() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
        .await
        .unwrap();

    let contract = h.quoted_put("wbtc-put-a", 800, 147);
    let err = h
        .fill_use_case()
        .fill(
            &mut h.vault,
            &AccountId::new("stranger"),
            contract,
            Amount::from_i64(10),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized { .. }));
}

#[tokio::test]
async fn sweep_of_empty_ledger_is_a_no_op() {
    let mut h = Harness::new();
    let report = h.sweep_use_case().sweep(&mut h.vault).await;

    assert!(report.settled.is_empty());
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);
    assert!(h.publisher.events().is_empty());
}

#[tokio::test]
async fn sweep_settles_expired_and_cancels_linked_sell_order() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
        .await
        .unwrap();

    let contract = h.quoted_put("wbtc-put-a", 800, 147);
    let series = AssetId::new("wbtc-put-a");
    let broker = AccountId::new(BROKER);
    h.ledger.mint(&series, &broker, Amount::from_i64(10));
    h.ledger.mint(
        &AssetId::new("usdc"),
        &AccountId::new(CUSTODY),
        Amount::from_i64(560),
    );
    h.fill_use_case()
        .fill(&mut h.vault, &broker, contract, Amount::from_i64(10))
        .await
        .unwrap();

    CreateSellOrderUseCase::new(Arc::clone(&h.publisher))
        .create(
            &mut h.vault,
            &AccountId::new(LIQUIDATOR),
            &series,
            Amount::from_i64(1),
        )
        .await
        .unwrap();
    h.publisher.clear();

    // First pass: nothing expired yet.
    let report = h.sweep_use_case().sweep(&mut h.vault).await;
    assert!(report.settled.is_empty());
    assert_eq!(report.skipped, 1);
    assert!(h.vault.positions().contains(&series));

    // Expire and sweep: position removed, linked sell order cancelled.
    h.settlement.mark_expired(&series);
    let report = h.sweep_use_case().sweep(&mut h.vault).await;
    assert_eq!(report.settled, vec![series.clone()]);
    assert!(h.vault.positions().is_empty());
    assert!(h.vault.sell_order().is_none());
    assert_eq!(
        h.publisher.event_types(),
        vec!["OPTION_REDEEMED", "SELL_ORDER_CANCELLED"]
    );

    // Idempotent: a second sweep changes nothing and emits nothing.
    h.publisher.clear();
    let report = h.sweep_use_case().sweep(&mut h.vault).await;
    assert!(report.settled.is_empty());
    assert_eq!(report.skipped, 0);
    assert!(h.publisher.events().is_empty());
}

#[tokio::test]
async fn sweep_continues_past_failing_entries() {
    let mut h = Harness::new();

    // Two positions via two deposit/fill cycles.
    for (series, strike) in [("wbtc-put-a", 800), ("wbtc-put-b", 700)] {
        h.deposit_use_case()
            .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(560))
            .await
            .unwrap();
        let contract = h.quoted_put(series, strike, 147);
        let broker = AccountId::new(BROKER);
        h.ledger
            .mint(&AssetId::new(series), &broker, Amount::from_i64(10));
        h.ledger.mint(
            &AssetId::new("usdc"),
            &AccountId::new(CUSTODY),
            Amount::from_i64(560),
        );
        h.fill_use_case()
            .fill(&mut h.vault, &broker, contract, Amount::from_i64(10))
            .await
            .unwrap();
    }
    h.publisher.clear();

    // First entry fails, second settles; the failure must not stop the pass.
    h.settlement.mark_failing(&AssetId::new("wbtc-put-a"));
    h.settlement.mark_expired(&AssetId::new("wbtc-put-b"));

    let report = h.sweep_use_case().sweep(&mut h.vault).await;
    assert_eq!(report.failed, 1);
    assert_eq!(report.settled, vec![AssetId::new("wbtc-put-b")]);
    assert!(h.vault.positions().contains(&AssetId::new("wbtc-put-a")));
    assert!(!h.vault.positions().contains(&AssetId::new("wbtc-put-b")));
}

#[tokio::test]
async fn broker_cancel_releases_the_slot_for_the_next_deposit() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(1000))
        .await
        .unwrap();

    CancelOrderUseCase::new(Arc::clone(&h.publisher))
        .cancel_buy(&mut h.vault, &AccountId::new(BROKER))
        .await
        .unwrap();
    assert!(h.vault.buy_order().is_none());

    // The slot is reusable immediately.
    let order = h
        .deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(500))
        .await
        .unwrap();
    assert!(order.is_some());
}

#[tokio::test]
async fn config_change_is_immediately_visible() {
    let mut h = Harness::new();

    UpdateConfigUseCase::new(Arc::clone(&h.publisher))
        .apply(
            &mut h.vault,
            &AccountId::new(CONTROLLER),
            vault_engine::ConfigChange::MinChunkValue(Amount::from_i64(2000)),
        )
        .await
        .unwrap();
    assert_eq!(h.publisher.event_types(), vec!["CONFIG_UPDATED"]);

    // A deposit that met the old threshold no longer creates an order.
    let order = h
        .deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(1000))
        .await
        .unwrap();
    assert!(order.is_none());
}

#[tokio::test]
async fn snapshot_exposes_the_query_surface() {
    let mut h = Harness::new();
    h.deposit_use_case()
        .deposit(&mut h.vault, &AccountId::new(OWNER), Amount::from_i64(1000))
        .await
        .unwrap();

    let snapshot = VaultSnapshot::capture(&h.vault);
    assert!(snapshot.buy_order.is_some());
    assert!(snapshot.sell_order.is_none());
    assert!(snapshot.positions.is_empty());
    assert_eq!(snapshot.config.min_chunk_value, Amount::from_i64(100));

    // Snapshots serialize for external monitors.
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("min_strike"));
}
