//! Mock SellerStore implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::CampaignSeller;
use crate::storage::{Result, SellerStore, StorageError};

/// Mock seller store that keeps sellers in memory.
#[derive(Default)]
pub struct MockSellerStore {
    sellers: RwLock<HashMap<Uuid, CampaignSeller>>,
    fail_on_write: RwLock<bool>,
    reads: RwLock<usize>,
}

impl MockSellerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, simulating a backend outage.
    pub async fn set_fail_on_write(&self, fail: bool) {
        *self.fail_on_write.write().await = fail;
    }

    /// Number of `get_seller` and `list_sellers` calls served so far.
    pub async fn read_count(&self) -> usize {
        *self.reads.read().await
    }

    async fn check_write(&self) -> Result<()> {
        if *self.fail_on_write.read().await {
            return Err(StorageError::Unavailable("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SellerStore for MockSellerStore {
    async fn list_sellers(&self, campaign_id: Uuid) -> Result<Vec<CampaignSeller>> {
        *self.reads.write().await += 1;
        let store = self.sellers.read().await;
        Ok(store
            .values()
            .filter(|s| s.campaign_id == campaign_id)
            .cloned()
            .collect())
    }

    async fn get_seller(&self, seller_id: Uuid) -> Result<Option<CampaignSeller>> {
        *self.reads.write().await += 1;
        Ok(self.sellers.read().await.get(&seller_id).cloned())
    }

    async fn put_seller(&self, seller: &CampaignSeller) -> Result<()> {
        self.check_write().await?;
        self.sellers.write().await.insert(seller.id, seller.clone());
        Ok(())
    }

    async fn set_personal_goal(&self, seller_id: Uuid, goal_cents: Option<i64>) -> Result<()> {
        self.check_write().await?;
        let mut store = self.sellers.write().await;
        let seller = store
            .get_mut(&seller_id)
            .ok_or(StorageError::SellerNotFound(seller_id))?;
        seller.personal_goal_cents = goal_cents;
        Ok(())
    }
}
