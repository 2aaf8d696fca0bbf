//! Campaign leaderboard ranking.
//!
//! Sellers are ordered by total sales, highest first. Equal sales are
//! broken by order count (more orders ranks higher), then by name and id
//! so that every seller gets a distinct position.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::SalesSummary;
use crate::model::CampaignSeller;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub seller_id: Uuid,
    pub name: String,
    pub total_sales_cents: i64,
    pub order_count: u32,
}

/// Where one seller stands relative to the rest of the campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank, or 0 when the seller is not ranked.
    pub rank: usize,
    pub total_sellers: usize,
    pub is_only_player: bool,
    /// Margin over second place. Only set for the leader of a field of
    /// two or more.
    pub lead_amount_cents: Option<i64>,
    /// Sales needed to catch the seller immediately above.
    pub gap_to_ahead_cents: Option<i64>,
}

impl Standing {
    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}

/// Sales as counted everywhere else: a negative counter reads as zero.
fn sales_cents(seller: &CampaignSeller) -> i64 {
    SalesSummary::from_seller(seller).total_sales_cents
}

fn leaderboard_order(a: &CampaignSeller, b: &CampaignSeller) -> Ordering {
    sales_cents(b)
        .cmp(&sales_cents(a))
        .then_with(|| b.order_count.cmp(&a.order_count))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

fn sorted(sellers: &[CampaignSeller]) -> Vec<&CampaignSeller> {
    let mut ordered: Vec<&CampaignSeller> = sellers.iter().collect();
    ordered.sort_by(|a, b| leaderboard_order(a, b));
    ordered
}

/// Rank every seller of a campaign.
pub fn rank_sellers(sellers: &[CampaignSeller]) -> Vec<LeaderboardEntry> {
    sorted(sellers)
        .into_iter()
        .enumerate()
        .map(|(i, s)| LeaderboardEntry {
            rank: i + 1,
            seller_id: s.id,
            name: s.name.clone(),
            total_sales_cents: sales_cents(s),
            order_count: s.order_count,
        })
        .collect()
}

/// Compute one seller's standing among `sellers`.
///
/// An empty field, or a seller that is not enrolled, yields rank 0 and no
/// lead or gap.
pub fn standing(sellers: &[CampaignSeller], seller_id: Uuid) -> Standing {
    let ordered = sorted(sellers);
    let total_sellers = ordered.len();

    let Some(index) = ordered.iter().position(|s| s.id == seller_id) else {
        return Standing {
            total_sellers,
            is_only_player: total_sellers == 1,
            ..Standing::default()
        };
    };

    let own = sales_cents(ordered[index]);
    let lead_amount_cents = match (index, ordered.get(1)) {
        (0, Some(second)) => Some(own - sales_cents(second)),
        _ => None,
    };
    let gap_to_ahead_cents = index
        .checked_sub(1)
        .map(|ahead| sales_cents(ordered[ahead]) - own);

    Standing {
        rank: index + 1,
        total_sellers,
        is_only_player: total_sellers == 1,
        lead_amount_cents,
        gap_to_ahead_cents,
    }
}
