//! Campaign and order storage interfaces.

use async_trait::async_trait;
use uuid::Uuid;

use super::seller_store::Result;
use crate::model::{Campaign, Order};

/// Interface for campaign persistence.
///
/// Implementations:
/// - `MockCampaignStore`: in-memory storage
/// - `SqliteCampaignStore`: SQLite storage
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Returns `None` if no campaign exists with this id.
    async fn get_campaign(&self, campaign_id: Uuid) -> Result<Option<Campaign>>;

    /// Insert or replace a campaign.
    async fn put_campaign(&self, campaign: &Campaign) -> Result<()>;
}

/// Interface for order persistence.
///
/// Implementations:
/// - `MockOrderStore`: in-memory storage
/// - `SqliteOrderStore`: SQLite storage
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders of a campaign regardless of payment state.
    async fn list_orders(&self, campaign_id: Uuid) -> Result<Vec<Order>>;

    /// Insert or replace an order.
    async fn put_order(&self, order: &Order) -> Result<()>;
}
