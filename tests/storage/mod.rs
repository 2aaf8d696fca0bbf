//! Shared storage integration tests.
//!
//! Tests the SellerStore, CampaignStore and OrderStore interfaces against all
//! implementations. Each implementation module imports these test functions
//! and runs them.

pub mod campaign_store_tests;
pub mod seller_store_tests;
