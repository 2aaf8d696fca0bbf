//! SellerStore interface tests.
//!
//! These tests verify the contract of the SellerStore trait.
//! Each storage implementation should run these tests.

use uuid::Uuid;

use bloomfund::model::CampaignSeller;
use bloomfund::storage::{SellerStore, StorageError};

/// Create a seller with the given sales counters.
pub fn make_seller(campaign_id: Uuid, name: &str, sales: i64, orders: u32) -> CampaignSeller {
    CampaignSeller::new(campaign_id, name).with_sales(sales, orders)
}

// =============================================================================
// SellerStore::get_seller / put_seller tests
// =============================================================================

pub async fn test_get_nonexistent<S: SellerStore>(store: &S) {
    let found = store
        .get_seller(Uuid::new_v4())
        .await
        .expect("get should succeed");
    assert!(found.is_none(), "unknown seller should be None");
}

pub async fn test_put_and_get<S: SellerStore>(store: &S) {
    let mut seller = make_seller(Uuid::new_v4(), "Ada", 12_345, 6);
    seller.personal_goal_cents = Some(40_000);

    store.put_seller(&seller).await.expect("put should succeed");

    let found = store
        .get_seller(seller.id)
        .await
        .expect("get should succeed")
        .expect("seller should exist");
    assert_eq!(found, seller);
}

pub async fn test_put_replaces<S: SellerStore>(store: &S) {
    let seller = make_seller(Uuid::new_v4(), "Ada", 1_000, 1);
    store.put_seller(&seller).await.expect("put should succeed");

    let updated = seller.clone().with_sales(9_000, 4);
    store.put_seller(&updated).await.expect("put should succeed");

    let found = store.get_seller(seller.id).await.unwrap().unwrap();
    assert_eq!(found.total_sales_cents, 9_000);
    assert_eq!(found.order_count, 4);
}

// =============================================================================
// SellerStore::list_sellers tests
// =============================================================================

pub async fn test_list_empty_campaign<S: SellerStore>(store: &S) {
    let sellers = store
        .list_sellers(Uuid::new_v4())
        .await
        .expect("list should succeed");
    assert!(sellers.is_empty());
}

pub async fn test_list_is_scoped_to_campaign<S: SellerStore>(store: &S) {
    let campaign = Uuid::new_v4();
    let other = Uuid::new_v4();

    let a = make_seller(campaign, "A", 500, 1);
    let b = make_seller(campaign, "B", 0, 0);
    let c = make_seller(other, "C", 900, 2);
    for s in [&a, &b, &c] {
        store.put_seller(s).await.expect("put should succeed");
    }

    let mut ids: Vec<_> = store
        .list_sellers(campaign)
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|s| s.id)
        .collect();
    ids.sort();

    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(ids, expected);
}

// =============================================================================
// SellerStore::set_personal_goal tests
// =============================================================================

pub async fn test_set_and_clear_goal<S: SellerStore>(store: &S) {
    let seller = make_seller(Uuid::new_v4(), "Ada", 2_000, 1);
    store.put_seller(&seller).await.unwrap();

    store
        .set_personal_goal(seller.id, Some(25_000))
        .await
        .expect("set should succeed");
    let found = store.get_seller(seller.id).await.unwrap().unwrap();
    assert_eq!(found.personal_goal_cents, Some(25_000));
    assert_eq!(found.total_sales_cents, 2_000, "sales must be untouched");
    assert_eq!(found.order_count, 1, "order count must be untouched");

    store
        .set_personal_goal(seller.id, None)
        .await
        .expect("clear should succeed");
    let found = store.get_seller(seller.id).await.unwrap().unwrap();
    assert_eq!(found.personal_goal_cents, None);
}

pub async fn test_set_goal_unknown_seller<S: SellerStore>(store: &S) {
    let missing = Uuid::new_v4();
    let result = store.set_personal_goal(missing, Some(1_000)).await;
    assert!(
        matches!(result, Err(StorageError::SellerNotFound(id)) if id == missing),
        "expected SellerNotFound, got {:?}",
        result
    );
}

// =============================================================================
// Test runner macro
// =============================================================================

/// Run all SellerStore interface tests against a store implementation.
#[macro_export]
macro_rules! run_seller_store_tests {
    ($store:expr) => {
        use $crate::storage::seller_store_tests::*;

        test_get_nonexistent($store).await;
        println!("  test_get_nonexistent: PASSED");

        test_put_and_get($store).await;
        println!("  test_put_and_get: PASSED");

        test_put_replaces($store).await;
        println!("  test_put_replaces: PASSED");

        test_list_empty_campaign($store).await;
        println!("  test_list_empty_campaign: PASSED");

        test_list_is_scoped_to_campaign($store).await;
        println!("  test_list_is_scoped_to_campaign: PASSED");

        test_set_and_clear_goal($store).await;
        println!("  test_set_and_clear_goal: PASSED");

        test_set_goal_unknown_seller($store).await;
        println!("  test_set_goal_unknown_seller: PASSED");
    };
}
