//! Organizer view of a campaign: totals, leaderboard, payouts.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::calculator::{
    payout_for_campaign, rank_sellers, CampaignSummary, LeaderboardEntry, PayoutBreakdown,
};
use crate::config::Config;
use crate::model::Campaign;
use crate::storage::{Result, Stores};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignOverview {
    /// `None` when no campaign record exists; the rest is then zeroed.
    pub campaign: Option<Campaign>,
    pub summary: CampaignSummary,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// `None` until the campaign is closed or fulfilled.
    pub payout: Option<PayoutBreakdown>,
}

pub struct OrganizerDashboard {
    stores: Stores,
    default_platform_fee_percent: f64,
}

impl OrganizerDashboard {
    pub fn new(stores: Stores, default_platform_fee_percent: f64) -> Self {
        Self {
            stores,
            default_platform_fee_percent,
        }
    }

    pub fn from_config(stores: Stores, config: &Config) -> Self {
        Self::new(stores, config.payout.default_platform_fee_percent)
    }

    /// Totals, leaderboard and payout for one campaign.
    ///
    /// A missing campaign record yields an empty overview, not an error.
    pub async fn campaign_overview(&self, campaign_id: Uuid) -> Result<CampaignOverview> {
        let Some(campaign) = self.stores.campaigns.get_campaign(campaign_id).await? else {
            debug!(campaign = %campaign_id, "No campaign record, returning empty overview");
            return Ok(CampaignOverview::default());
        };

        let orders = self.stores.orders.list_orders(campaign_id).await?;
        let sellers = self.stores.sellers.list_sellers(campaign_id).await?;

        let summary = CampaignSummary::from_orders(&orders, sellers.len());
        let leaderboard = rank_sellers(&sellers);
        let payout = payout_for_campaign(
            &campaign,
            summary.total_revenue_cents,
            self.default_platform_fee_percent,
        );

        debug!(
            campaign = %campaign_id,
            status = %campaign.status,
            revenue_cents = summary.total_revenue_cents,
            sellers = sellers.len(),
            payout_visible = payout.is_some(),
            "Computed campaign overview"
        );

        Ok(CampaignOverview {
            campaign: Some(campaign),
            summary,
            leaderboard,
            payout,
        })
    }

    /// Payout figures alone. `Ok(None)` while payouts are not yet shown.
    pub async fn payout_breakdown(&self, campaign_id: Uuid) -> Result<Option<PayoutBreakdown>> {
        Ok(self.campaign_overview(campaign_id).await?.payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CampaignSeller, CampaignStatus, Order};

    async fn seeded(status: CampaignStatus) -> (OrganizerDashboard, Campaign) {
        let stores = Stores::memory();
        let mut campaign = Campaign::new("Westside Choir", "Valentine Roses");
        campaign.status = status;
        campaign.florist_margin_percent = 60.0;
        campaign.organization_margin_percent = 30.0;
        stores.campaigns.put_campaign(&campaign).await.unwrap();

        let seller = CampaignSeller::new(campaign.id, "Ada").with_sales(70_000, 7);
        stores.sellers.put_seller(&seller).await.unwrap();
        stores
            .orders
            .put_order(&Order::paid(campaign.id, Some(seller.id), 70_000))
            .await
            .unwrap();
        stores
            .orders
            .put_order(&Order::paid(campaign.id, None, 30_000))
            .await
            .unwrap();

        (OrganizerDashboard::from_config(stores, &Config::for_test()), campaign)
    }

    #[tokio::test]
    async fn test_closed_campaign_shows_payout() {
        let (dashboard, campaign) = seeded(CampaignStatus::Closed).await;
        let overview = dashboard.campaign_overview(campaign.id).await.unwrap();

        assert_eq!(overview.summary.total_revenue_cents, 100_000);
        assert_eq!(overview.leaderboard.len(), 1);
        let payout = overview.payout.unwrap();
        assert_eq!(payout.florist_cents, 60_000);
        assert_eq!(payout.organization_cents, 30_000);
        assert_eq!(payout.platform_fee_cents, 10_000);
        assert_eq!(payout.platform_retained_cents, 10_000);
    }

    #[tokio::test]
    async fn test_active_campaign_hides_payout() {
        let (dashboard, campaign) = seeded(CampaignStatus::Active).await;
        assert_eq!(dashboard.payout_breakdown(campaign.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_campaign_is_zero_state() {
        let stores = Stores::memory();
        let campaign_id = Uuid::new_v4();
        // Orphaned rows are ignored without a campaign record.
        stores
            .orders
            .put_order(&Order::paid(campaign_id, None, 5_000))
            .await
            .unwrap();
        let dashboard = OrganizerDashboard::new(stores, 10.0);

        let overview = dashboard.campaign_overview(campaign_id).await.unwrap();
        assert_eq!(overview.campaign, None);
        assert_eq!(overview.summary, CampaignSummary::default());
        assert!(overview.leaderboard.is_empty());
        assert_eq!(overview.payout, None);

        assert_eq!(dashboard.payout_breakdown(campaign_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_campaign_is_zero_state() {
        let stores = Stores::memory();
        let mut campaign = Campaign::new("Westside Choir", "Empty");
        campaign.status = CampaignStatus::Fulfilled;
        stores.campaigns.put_campaign(&campaign).await.unwrap();

        let dashboard = OrganizerDashboard::new(stores, 10.0);
        let overview = dashboard.campaign_overview(campaign.id).await.unwrap();
        assert!(overview.leaderboard.is_empty());
        assert_eq!(overview.summary, CampaignSummary::default());
        assert_eq!(overview.payout, Some(PayoutBreakdown::default()));
    }
}
