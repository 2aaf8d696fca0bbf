//! Revenue split between florist, organization and platform.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Campaign;

/// Platform fee applied when a campaign does not set one.
pub const DEFAULT_PLATFORM_FEE_PERCENT: f64 = 10.0;

/// Configured percentages (0-100) for one campaign.
///
/// The percentages are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutSplit {
    pub florist_margin_percent: f64,
    pub organization_margin_percent: f64,
    pub platform_fee_percent: f64,
}

impl PayoutSplit {
    pub fn from_campaign(campaign: &Campaign, default_platform_fee_percent: f64) -> Self {
        Self {
            florist_margin_percent: campaign.florist_margin_percent,
            organization_margin_percent: campaign.organization_margin_percent,
            platform_fee_percent: campaign
                .platform_fee_percent
                .unwrap_or(default_platform_fee_percent),
        }
    }

    pub fn breakdown(&self, total_revenue_cents: i64) -> PayoutBreakdown {
        let florist_cents = share(total_revenue_cents, self.florist_margin_percent);
        let organization_cents = share(total_revenue_cents, self.organization_margin_percent);
        let platform_fee_cents = share(total_revenue_cents, self.platform_fee_percent);
        let platform_retained_cents = total_revenue_cents - florist_cents - organization_cents;

        if platform_retained_cents < 0 {
            warn!(
                florist = self.florist_margin_percent,
                organization = self.organization_margin_percent,
                "Margins exceed campaign revenue"
            );
        }

        PayoutBreakdown {
            total_revenue_cents,
            florist_cents,
            organization_cents,
            platform_fee_cents,
            platform_retained_cents,
        }
    }
}

/// `revenue * percent / 100`, rounded to the nearest cent.
fn share(total_cents: i64, percent: f64) -> i64 {
    (total_cents as f64 * percent / 100.0).round() as i64
}

/// Amounts owed to each party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    pub total_revenue_cents: i64,
    pub florist_cents: i64,
    pub organization_cents: i64,
    /// Fee at the configured platform percentage.
    pub platform_fee_cents: i64,
    /// What is left after the florist and organization are paid.
    pub platform_retained_cents: i64,
}

/// Payout figures for display, or `None` while the campaign is still
/// selling (or was never run).
pub fn payout_for_campaign(
    campaign: &Campaign,
    total_revenue_cents: i64,
    default_platform_fee_percent: f64,
) -> Option<PayoutBreakdown> {
    if !campaign.status.exposes_payouts() {
        return None;
    }
    Some(PayoutSplit::from_campaign(campaign, default_platform_fee_percent).breakdown(total_revenue_cents))
}
