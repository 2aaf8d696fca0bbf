//! Goal, badge, and payout configuration types.

use serde::Deserialize;

use crate::calculator::{
    default_badges, Badge, BadgeTable, BadgeTableError, DEFAULT_PLATFORM_FEE_PERCENT,
};

/// Payout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayoutConfig {
    /// Platform fee applied to campaigns that do not set one.
    /// Default: 10
    pub default_platform_fee_percent: f64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            default_platform_fee_percent: DEFAULT_PLATFORM_FEE_PERCENT,
        }
    }
}

/// Badge configuration.
///
/// ```yaml
/// badges:
///   tiers:
///     - threshold_cents: 100
///       emoji: "🌱"
///       name: First Sprout
///       description: Made your first sale
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Tiers ascending by threshold. Defaults to the stock five tiers.
    pub tiers: Vec<Badge>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            tiers: default_badges(),
        }
    }
}

impl BadgeConfig {
    /// Validate the configured tiers into a [`BadgeTable`].
    pub fn table(&self) -> Result<BadgeTable, BadgeTableError> {
        BadgeTable::new(self.tiers.clone())
    }
}
