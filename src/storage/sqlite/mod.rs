//! SQLite implementations of storage interfaces.

mod campaign_store;
mod seller_store;

pub use campaign_store::{SqliteCampaignStore, SqliteOrderStore};
pub use seller_store::SqliteSellerStore;
