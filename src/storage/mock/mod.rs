//! Mock storage implementations for testing and the `memory` backend.

mod campaign_store;
mod seller_store;

pub use campaign_store::{MockCampaignStore, MockOrderStore};
pub use seller_store::MockSellerStore;
