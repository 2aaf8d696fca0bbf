//! Mock CampaignStore and OrderStore implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{Campaign, Order};
use crate::storage::{CampaignStore, OrderStore, Result};

/// Mock campaign store that keeps campaigns in memory.
#[derive(Default)]
pub struct MockCampaignStore {
    campaigns: RwLock<HashMap<Uuid, Campaign>>,
}

impl MockCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CampaignStore for MockCampaignStore {
    async fn get_campaign(&self, campaign_id: Uuid) -> Result<Option<Campaign>> {
        Ok(self.campaigns.read().await.get(&campaign_id).cloned())
    }

    async fn put_campaign(&self, campaign: &Campaign) -> Result<()> {
        self.campaigns
            .write()
            .await
            .insert(campaign.id, campaign.clone());
        Ok(())
    }
}

/// Mock order store that keeps orders in memory, in insertion order.
#[derive(Default)]
pub struct MockOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl MockOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stored_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn list_orders(&self, campaign_id: Uuid) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .filter(|o| o.campaign_id == campaign_id)
            .cloned()
            .collect())
    }

    async fn put_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(())
    }
}
