//! Sales milestone badges.

use serde::{Deserialize, Serialize};

/// A milestone unlocked once cumulative sales reach `threshold_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub threshold_cents: i64,
    pub emoji: String,
    pub name: String,
    pub description: String,
}

impl Badge {
    pub fn new(threshold_cents: i64, emoji: &str, name: &str, description: &str) -> Self {
        Self {
            threshold_cents,
            emoji: emoji.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadgeTableError {
    #[error("Badge table is empty")]
    Empty,
    #[error("Badge {name:?} has non-positive threshold {threshold_cents}")]
    NonPositiveThreshold { name: String, threshold_cents: i64 },
    #[error("Badge thresholds must be strictly ascending: {previous} then {next}")]
    NotAscending { previous: i64, next: i64 },
}

/// Ordered badge thresholds, ascending by amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeTable {
    badges: Vec<Badge>,
}

impl Default for BadgeTable {
    fn default() -> Self {
        Self {
            badges: default_badges(),
        }
    }
}

/// The stock five-tier table: $1, $50, $150, $300, $500.
pub fn default_badges() -> Vec<Badge> {
    vec![
        Badge::new(100, "🌱", "First Sprout", "Made your first sale"),
        Badge::new(5_000, "🌷", "Budding Seller", "Sold $50 in flowers"),
        Badge::new(15_000, "🌻", "In Full Bloom", "Sold $150 in flowers"),
        Badge::new(30_000, "💐", "Bouquet Builder", "Sold $300 in flowers"),
        Badge::new(50_000, "🏆", "Garden Champion", "Sold $500 in flowers"),
    ]
}

impl BadgeTable {
    pub fn new(badges: Vec<Badge>) -> Result<Self, BadgeTableError> {
        if badges.is_empty() {
            return Err(BadgeTableError::Empty);
        }
        if let Some(bad) = badges.iter().find(|b| b.threshold_cents <= 0) {
            return Err(BadgeTableError::NonPositiveThreshold {
                name: bad.name.clone(),
                threshold_cents: bad.threshold_cents,
            });
        }
        for pair in badges.windows(2) {
            if pair[1].threshold_cents <= pair[0].threshold_cents {
                return Err(BadgeTableError::NotAscending {
                    previous: pair[0].threshold_cents,
                    next: pair[1].threshold_cents,
                });
            }
        }
        Ok(Self { badges })
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Badges earned at `total_sales_cents` and progress to the next one.
    pub fn evaluate(&self, total_sales_cents: i64) -> BadgeProgress {
        let split = self
            .badges
            .partition_point(|b| b.threshold_cents <= total_sales_cents);
        let earned = self.badges[..split].to_vec();
        let next = self.badges.get(split).cloned();

        let next_progress_percent = match &next {
            Some(badge) => {
                (total_sales_cents.max(0) as f64 / badge.threshold_cents as f64 * 100.0)
                    .clamp(0.0, 100.0)
            }
            None => 100.0,
        };

        BadgeProgress {
            earned,
            next,
            next_progress_percent,
        }
    }
}

/// Result of [`BadgeTable::evaluate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeProgress {
    /// Ascending by threshold.
    pub earned: Vec<Badge>,
    /// First badge not yet earned. `None` once all are earned.
    pub next: Option<Badge>,
    pub next_progress_percent: f64,
}

impl BadgeProgress {
    pub fn all_earned(&self) -> bool {
        self.next.is_none()
    }
}
