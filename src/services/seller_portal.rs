//! Seller-facing stats: rank, goal, badges.
//!
//! Stats are computed from a fresh read of the campaign's sellers and
//! cached per seller. Writes made through the portal invalidate the
//! writer's entry; changes made elsewhere are picked up through
//! [`SellerPortal::refresh`] or [`SellerPortal::invalidate_campaign`].

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculator::{
    leaderboard, parse_goal_amount, validate_goal_cents, BadgeProgress, BadgeTable,
    BadgeTableError, GoalError, GoalPolicy, GoalProgress, SalesSummary, Standing,
};
use crate::config::Config;
use crate::model::CampaignSeller;
use crate::storage::{StorageError, Stores};

/// Errors surfaced to the seller.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("{0}")]
    Validation(#[from] GoalError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Where seller sales figures come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalesSource {
    /// Trust `total_sales_cents` / `order_count` on the seller row.
    #[default]
    Counters,
    /// Recompute from the campaign's paid orders.
    Orders,
}

/// Everything the seller dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerStats {
    pub seller: CampaignSeller,
    pub sales: SalesSummary,
    pub standing: Standing,
    pub goal: GoalProgress,
    pub badges: BadgeProgress,
}

/// Cached stats plus invalidation counters.
///
/// A fill is only stored if no invalidation touched the seller while the
/// stats were being computed.
#[derive(Default)]
struct StatsCache {
    entries: HashMap<Uuid, SellerStats>,
    generations: HashMap<Uuid, u64>,
    campaign_generation: u64,
}

impl StatsCache {
    fn generation(&self, seller_id: Uuid) -> (u64, u64) {
        (
            self.campaign_generation,
            self.generations.get(&seller_id).copied().unwrap_or(0),
        )
    }

    fn invalidate(&mut self, seller_id: Uuid) {
        self.entries.remove(&seller_id);
        *self.generations.entry(seller_id).or_default() += 1;
    }
}

pub struct SellerPortal {
    stores: Stores,
    badges: BadgeTable,
    goals: GoalPolicy,
    sales_source: SalesSource,
    cache: RwLock<StatsCache>,
}

impl SellerPortal {
    pub fn new(stores: Stores, badges: BadgeTable, goals: GoalPolicy) -> Self {
        Self {
            stores,
            badges,
            goals,
            sales_source: SalesSource::default(),
            cache: RwLock::new(StatsCache::default()),
        }
    }

    /// Build a portal with the badge tiers and goal policy from `config`.
    pub fn from_config(stores: Stores, config: &Config) -> Result<Self, BadgeTableError> {
        Ok(Self::new(
            stores,
            config.badges.table()?,
            config.goals.clone(),
        ))
    }

    pub fn with_sales_source(mut self, source: SalesSource) -> Self {
        self.sales_source = source;
        self
    }

    /// Stats for one seller, served from cache when possible.
    pub async fn seller_stats(&self, seller_id: Uuid) -> Result<SellerStats, PortalError> {
        let generation = {
            let cache = self.cache.read().await;
            if let Some(stats) = cache.entries.get(&seller_id) {
                debug!(seller = %seller_id, "Seller stats cache hit");
                return Ok(stats.clone());
            }
            cache.generation(seller_id)
        };

        let stats = self.compute(seller_id).await?;

        let mut cache = self.cache.write().await;
        if cache.generation(seller_id) == generation {
            cache.entries.insert(seller_id, stats.clone());
        } else {
            debug!(seller = %seller_id, "Invalidated during compute, not caching");
        }
        Ok(stats)
    }

    /// Drop any cached stats for `seller_id` and recompute.
    pub async fn refresh(&self, seller_id: Uuid) -> Result<SellerStats, PortalError> {
        self.invalidate(seller_id).await;
        self.seller_stats(seller_id).await
    }

    /// Drop cached stats for every seller of a campaign, e.g. after new
    /// orders were attributed.
    pub async fn invalidate_campaign(&self, campaign_id: Uuid) {
        let mut cache = self.cache.write().await;
        cache
            .entries
            .retain(|_, stats| stats.seller.campaign_id != campaign_id);
        cache.campaign_generation += 1;
    }

    async fn invalidate(&self, seller_id: Uuid) {
        self.cache.write().await.invalidate(seller_id);
    }

    /// Set a personal goal from user input such as `"250"` or `"$1,000"`.
    ///
    /// Invalid input is rejected before anything is written.
    pub async fn set_personal_goal(&self, seller_id: Uuid, input: &str) -> Result<(), PortalError> {
        let cents = parse_goal_amount(input).inspect_err(|e| {
            warn!(seller = %seller_id, input = %input, error = %e, "Rejected goal input");
        })?;
        self.write_goal(seller_id, Some(cents)).await
    }

    /// Set a personal goal given in cents.
    pub async fn set_personal_goal_cents(
        &self,
        seller_id: Uuid,
        goal_cents: i64,
    ) -> Result<(), PortalError> {
        let cents = validate_goal_cents(goal_cents).inspect_err(|e| {
            warn!(seller = %seller_id, goal_cents, error = %e, "Rejected goal");
        })?;
        self.write_goal(seller_id, Some(cents)).await
    }

    /// Remove the personal goal so the suggested goal applies again.
    pub async fn clear_personal_goal(&self, seller_id: Uuid) -> Result<(), PortalError> {
        self.write_goal(seller_id, None).await
    }

    async fn write_goal(&self, seller_id: Uuid, goal_cents: Option<i64>) -> Result<(), PortalError> {
        if let Err(e) = self.stores.sellers.set_personal_goal(seller_id, goal_cents).await {
            warn!(seller = %seller_id, error = %e, "Failed to save personal goal");
            return Err(e.into());
        }
        self.invalidate(seller_id).await;

        match goal_cents {
            Some(cents) => info!(seller = %seller_id, goal_cents = cents, "Personal goal set"),
            None => info!(seller = %seller_id, "Personal goal cleared"),
        }
        Ok(())
    }

    async fn compute(&self, seller_id: Uuid) -> Result<SellerStats, PortalError> {
        let seller = self
            .stores
            .sellers
            .get_seller(seller_id)
            .await?
            .ok_or(StorageError::SellerNotFound(seller_id))?;

        let mut sellers = self.stores.sellers.list_sellers(seller.campaign_id).await?;
        if self.sales_source == SalesSource::Orders {
            let orders = self.stores.orders.list_orders(seller.campaign_id).await?;
            for s in &mut sellers {
                let sales = SalesSummary::from_orders(s.id, &orders);
                s.total_sales_cents = sales.total_sales_cents;
                s.order_count = sales.order_count;
            }
        }

        let current = sellers
            .iter()
            .find(|s| s.id == seller_id)
            .cloned()
            .unwrap_or(seller);

        let sales = SalesSummary::from_seller(&current);
        let standing = leaderboard::standing(&sellers, seller_id);
        let goal = GoalProgress::resolve(
            &sales,
            current.personal_goal_cents,
            standing.total_sellers,
            &self.goals,
        );
        let badges = self.badges.evaluate(sales.total_sales_cents);

        debug!(
            seller = %seller_id,
            rank = standing.rank,
            total_sellers = standing.total_sellers,
            goal_cents = goal.goal_cents,
            earned_badges = badges.earned.len(),
            "Computed seller stats"
        );

        Ok(SellerStats {
            seller: current,
            sales,
            standing,
            goal,
            badges,
        })
    }
}
