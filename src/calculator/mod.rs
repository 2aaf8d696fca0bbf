//! Pure campaign calculations.
//!
//! Everything here is a synchronous function of already-fetched rows.
//! Fetching and persisting lives in [`crate::storage`] and
//! [`crate::services`].

pub mod badges;
pub mod goal;
pub mod leaderboard;
pub mod payout;
pub mod sales;
pub mod summary;

pub use badges::{default_badges, Badge, BadgeProgress, BadgeTable, BadgeTableError};
pub use goal::{parse_goal_amount, validate_goal_cents, GoalError, GoalPolicy, GoalProgress};
pub use leaderboard::{rank_sellers, standing, LeaderboardEntry, Standing};
pub use payout::{
    payout_for_campaign, PayoutBreakdown, PayoutSplit, DEFAULT_PLATFORM_FEE_PERCENT,
};
pub use sales::SalesSummary;
pub use summary::{campaign_revenue_cents, CampaignSummary, FulfillmentBreakdown};
