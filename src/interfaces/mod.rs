//! Abstract interfaces for bloomfund components.
//!
//! These traits separate the calculators from wherever the campaign rows
//! live:
//! - Seller storage (leaderboard input, personal goal writes)
//! - Campaign storage (margins, status)
//! - Order storage (revenue, fulfillment)

pub mod campaign_store;
pub mod seller_store;

pub use campaign_store::{CampaignStore, OrderStore};
pub use seller_store::{Result, SellerStore, StorageError};
