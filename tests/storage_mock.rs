//! In-memory storage integration tests.
//!
//! Run with: cargo test --test storage_mock

mod storage;

use bloomfund::storage::{MockCampaignStore, MockOrderStore, MockSellerStore};

#[tokio::test]
async fn test_mock_seller_store() {
    println!("=== Mock SellerStore Tests ===");

    let store = MockSellerStore::new();
    run_seller_store_tests!(&store);

    println!("=== All Mock SellerStore tests PASSED ===");
}

#[tokio::test]
async fn test_mock_campaign_store() {
    println!("=== Mock CampaignStore Tests ===");

    let store = MockCampaignStore::new();
    run_campaign_store_tests!(&store);

    println!("=== All Mock CampaignStore tests PASSED ===");
}

#[tokio::test]
async fn test_mock_order_store() {
    println!("=== Mock OrderStore Tests ===");

    let store = MockOrderStore::new();
    run_order_store_tests!(&store);

    println!("=== All Mock OrderStore tests PASSED ===");
}
