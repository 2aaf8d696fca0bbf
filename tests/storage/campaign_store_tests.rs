//! CampaignStore and OrderStore interface tests.

use chrono::NaiveDate;
use uuid::Uuid;

use bloomfund::model::{Campaign, CampaignStatus, FulfillmentStatus, Order, PaymentStatus};
use bloomfund::storage::{CampaignStore, OrderStore};

/// Create a fully populated campaign.
pub fn make_campaign() -> Campaign {
    let mut campaign = Campaign::new("Lincoln Elementary PTA", "Spring Tulip Sale");
    campaign.status = CampaignStatus::Active;
    campaign.starts_on = NaiveDate::from_ymd_opt(2026, 3, 1);
    campaign.ends_on = NaiveDate::from_ymd_opt(2026, 3, 21);
    campaign.florist_margin_percent = 55.5;
    campaign.organization_margin_percent = 34.5;
    campaign.platform_fee_percent = Some(10.0);
    campaign
}

// =============================================================================
// CampaignStore tests
// =============================================================================

pub async fn test_campaign_get_nonexistent<S: CampaignStore>(store: &S) {
    let found = store
        .get_campaign(Uuid::new_v4())
        .await
        .expect("get should succeed");
    assert!(found.is_none());
}

pub async fn test_campaign_put_and_get<S: CampaignStore>(store: &S) {
    let campaign = make_campaign();
    store.put_campaign(&campaign).await.expect("put should succeed");

    let found = store
        .get_campaign(campaign.id)
        .await
        .expect("get should succeed")
        .expect("campaign should exist");
    assert_eq!(found, campaign);
}

pub async fn test_campaign_optional_fields<S: CampaignStore>(store: &S) {
    let campaign = Campaign::new("Hillside Band", "Draft");
    store.put_campaign(&campaign).await.expect("put should succeed");

    let found = store.get_campaign(campaign.id).await.unwrap().unwrap();
    assert_eq!(found.starts_on, None);
    assert_eq!(found.platform_fee_percent, None);
    assert_eq!(found.status, CampaignStatus::Draft);
}

pub async fn test_campaign_status_update<S: CampaignStore>(store: &S) {
    let mut campaign = make_campaign();
    store.put_campaign(&campaign).await.unwrap();

    campaign.status = CampaignStatus::Closed;
    store.put_campaign(&campaign).await.unwrap();

    let found = store.get_campaign(campaign.id).await.unwrap().unwrap();
    assert_eq!(found.status, CampaignStatus::Closed);
}

// =============================================================================
// OrderStore tests
// =============================================================================

pub async fn test_orders_empty<S: OrderStore>(store: &S) {
    let orders = store
        .list_orders(Uuid::new_v4())
        .await
        .expect("list should succeed");
    assert!(orders.is_empty());
}

pub async fn test_orders_round_trip<S: OrderStore>(store: &S) {
    let campaign = Uuid::new_v4();
    let seller = Uuid::new_v4();

    let mut delivered = Order::paid(campaign, Some(seller), 4_500);
    delivered.fulfillment_status = FulfillmentStatus::Delivered;
    let mut unpaid = Order::paid(campaign, None, 2_000);
    unpaid.payment_status = PaymentStatus::Pending;
    let elsewhere = Order::paid(Uuid::new_v4(), Some(seller), 9_999);

    for order in [&delivered, &unpaid, &elsewhere] {
        store.put_order(order).await.expect("put should succeed");
    }

    let mut orders = store.list_orders(campaign).await.expect("list should succeed");
    orders.sort_by_key(|o| o.total_cents);
    assert_eq!(orders, vec![unpaid, delivered]);
}

pub async fn test_order_status_update<S: OrderStore>(store: &S) {
    let campaign = Uuid::new_v4();
    let mut order = Order::paid(campaign, None, 3_000);
    store.put_order(&order).await.unwrap();

    order.fulfillment_status = FulfillmentStatus::PickedUp;
    store.put_order(&order).await.unwrap();

    let orders = store.list_orders(campaign).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].fulfillment_status, FulfillmentStatus::PickedUp);
}

// =============================================================================
// Test runner macros
// =============================================================================

/// Run all CampaignStore interface tests against a store implementation.
#[macro_export]
macro_rules! run_campaign_store_tests {
    ($store:expr) => {
        use $crate::storage::campaign_store_tests::*;

        test_campaign_get_nonexistent($store).await;
        println!("  test_campaign_get_nonexistent: PASSED");

        test_campaign_put_and_get($store).await;
        println!("  test_campaign_put_and_get: PASSED");

        test_campaign_optional_fields($store).await;
        println!("  test_campaign_optional_fields: PASSED");

        test_campaign_status_update($store).await;
        println!("  test_campaign_status_update: PASSED");
    };
}

/// Run all OrderStore interface tests against a store implementation.
#[macro_export]
macro_rules! run_order_store_tests {
    ($store:expr) => {
        use $crate::storage::campaign_store_tests::*;

        test_orders_empty($store).await;
        println!("  test_orders_empty: PASSED");

        test_orders_round_trip($store).await;
        println!("  test_orders_round_trip: PASSED");

        test_order_status_update($store).await;
        println!("  test_order_status_update: PASSED");
    };
}
