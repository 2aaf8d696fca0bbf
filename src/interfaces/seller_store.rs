//! Campaign seller storage interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{CampaignSeller, UnknownVariant};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Seller not found: {0}")]
    SellerNotFound(Uuid),

    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("Corrupt row: {0}")]
    Corrupt(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<UnknownVariant> for StorageError {
    fn from(e: UnknownVariant) -> Self {
        StorageError::Corrupt(e.to_string())
    }
}

/// Interface for campaign seller persistence.
///
/// `total_sales_cents` and `order_count` are written by order processing
/// through [`SellerStore::put_seller`]. Sellers themselves only ever change
/// their personal goal.
///
/// Implementations:
/// - `MockSellerStore`: in-memory storage
/// - `SqliteSellerStore`: SQLite storage
#[async_trait]
pub trait SellerStore: Send + Sync {
    /// All sellers enrolled in a campaign, in no particular order.
    async fn list_sellers(&self, campaign_id: Uuid) -> Result<Vec<CampaignSeller>>;

    /// Returns `None` if the seller does not exist.
    async fn get_seller(&self, seller_id: Uuid) -> Result<Option<CampaignSeller>>;

    /// Insert or replace a seller row.
    async fn put_seller(&self, seller: &CampaignSeller) -> Result<()>;

    /// Set (`Some`) or clear (`None`) a seller's personal goal.
    ///
    /// Fails with [`StorageError::SellerNotFound`] if the seller does not
    /// exist. No other column is touched.
    async fn set_personal_goal(&self, seller_id: Uuid, goal_cents: Option<i64>) -> Result<()>;
}
