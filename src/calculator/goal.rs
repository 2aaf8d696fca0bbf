//! Seller sales goals.
//!
//! A seller either sets a personal goal or gets a suggested one that grows
//! mildly with the number of sellers in the campaign.

use serde::{Deserialize, Serialize};

use super::sales::SalesSummary;

/// Rejected goal input. Nothing is written when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalError {
    #[error("Please enter a goal amount")]
    Empty,
    #[error("Goal must be a number, got {0:?}")]
    NotANumber(String),
    #[error("Goal must be greater than zero")]
    NotPositive,
}

/// Parameters of the suggested goal.
///
/// With the defaults this is `roundUpToNearest($50, min($150 + n * $25, $500))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalPolicy {
    pub base_cents: i64,
    pub per_seller_cents: i64,
    pub cap_cents: i64,
    /// The suggestion is rounded up to a multiple of this.
    pub step_cents: i64,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        Self {
            base_cents: 15_000,
            per_seller_cents: 2_500,
            cap_cents: 50_000,
            step_cents: 5_000,
        }
    }
}

impl GoalPolicy {
    /// Suggested goal for a campaign with `total_sellers` sellers.
    pub fn dynamic_goal(&self, total_sellers: usize) -> i64 {
        let sellers = i64::try_from(total_sellers).unwrap_or(i64::MAX);
        let raw = self
            .base_cents
            .saturating_add(sellers.saturating_mul(self.per_seller_cents))
            .min(self.cap_cents);
        if self.step_cents <= 0 {
            return raw;
        }
        let steps = raw / self.step_cents + i64::from(raw % self.step_cents > 0);
        steps * self.step_cents
    }
}

/// Progress toward the goal that applies to a seller right now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_cents: i64,
    pub is_personal_goal: bool,
    /// Always within 0..=100.
    pub progress_percent: f64,
    pub exceeded: bool,
}

impl GoalProgress {
    /// Resolve the active goal and measure `sales` against it.
    ///
    /// A personal goal wins when it is set and positive.
    pub fn resolve(
        sales: &SalesSummary,
        personal_goal_cents: Option<i64>,
        total_sellers: usize,
        policy: &GoalPolicy,
    ) -> Self {
        let (goal_cents, is_personal_goal) = match personal_goal_cents {
            Some(goal) if goal > 0 => (goal, true),
            _ => (policy.dynamic_goal(total_sellers), false),
        };

        let progress_percent = if goal_cents > 0 {
            (sales.total_sales_cents as f64 / goal_cents as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };

        Self {
            goal_cents,
            is_personal_goal,
            progress_percent,
            exceeded: sales.total_sales_cents >= goal_cents,
        }
    }
}

/// Parse a user-entered dollar amount into a positive number of cents.
///
/// Accepts surrounding whitespace, a leading `$` and thousands separators.
pub fn parse_goal_amount(input: &str) -> Result<i64, GoalError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(GoalError::Empty);
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let dollars: f64 = cleaned
        .parse()
        .map_err(|_| GoalError::NotANumber(input.trim().to_string()))?;
    if !dollars.is_finite() {
        return Err(GoalError::NotANumber(input.trim().to_string()));
    }

    let cents = (dollars * 100.0).round();
    if cents < 1.0 {
        return Err(GoalError::NotPositive);
    }
    if cents > i64::MAX as f64 {
        return Err(GoalError::NotANumber(input.trim().to_string()));
    }
    Ok(cents as i64)
}

/// Validate a goal already given in cents.
pub fn validate_goal_cents(cents: i64) -> Result<i64, GoalError> {
    if cents <= 0 {
        return Err(GoalError::NotPositive);
    }
    Ok(cents)
}
