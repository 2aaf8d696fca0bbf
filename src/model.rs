//! Campaign, seller and order records consumed by the calculators.
//!
//! These rows are owned by the surrounding order-processing system. The
//! calculators only read them; the single write path is the seller's
//! personal goal (see [`crate::services::SellerPortal`]).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned when a stored status string is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Lifecycle of a fundraising campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Scheduled,
    Active,
    Closed,
    Fulfilled,
    Completed,
    Cancelled,
}

string_enum!(CampaignStatus, "campaign status", {
    Draft => "draft",
    Scheduled => "scheduled",
    Active => "active",
    Closed => "closed",
    Fulfilled => "fulfilled",
    Completed => "completed",
    Cancelled => "cancelled",
});

impl CampaignStatus {
    /// Payout figures are only shown once selling has stopped and the
    /// orders are being (or have been) handed over.
    pub fn exposes_payouts(&self) -> bool {
        matches!(self, CampaignStatus::Closed | CampaignStatus::Fulfilled)
    }
}

/// Physical-handling stage of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Pending,
    InProduction,
    Ready,
    PickedUp,
    Delivered,
}

string_enum!(FulfillmentStatus, "fulfillment status", {
    Pending => "pending",
    InProduction => "in_production",
    Ready => "ready",
    PickedUp => "picked_up",
    Delivered => "delivered",
});

/// Payment state of an order. Only [`PaymentStatus::Paid`] orders count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

string_enum!(PaymentStatus, "payment status", {
    Pending => "pending",
    Paid => "paid",
    Failed => "failed",
    Refunded => "refunded",
});

/// A fundraising run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub organization: String,
    pub name: String,
    pub status: CampaignStatus,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    /// Percent (0-100) of revenue paid to the florist.
    pub florist_margin_percent: f64,
    /// Percent (0-100) of revenue paid to the organization.
    pub organization_margin_percent: f64,
    /// Platform fee percent. `None` falls back to the configured default.
    pub platform_fee_percent: Option<f64>,
}

impl Campaign {
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization: organization.into(),
            name: name.into(),
            status: CampaignStatus::Draft,
            starts_on: None,
            ends_on: None,
            florist_margin_percent: 0.0,
            organization_margin_percent: 0.0,
            platform_fee_percent: None,
        }
    }
}

/// A seller enrolled in one campaign.
///
/// `total_sales_cents` and `order_count` are maintained upstream as orders
/// are attributed and are treated as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSeller {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    pub total_sales_cents: i64,
    pub order_count: u32,
    pub personal_goal_cents: Option<i64>,
}

impl CampaignSeller {
    pub fn new(campaign_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            campaign_id,
            name: name.into(),
            total_sales_cents: 0,
            order_count: 0,
            personal_goal_cents: None,
        }
    }

    pub fn with_sales(mut self, total_sales_cents: i64, order_count: u32) -> Self {
        self.total_sales_cents = total_sales_cents;
        self.order_count = order_count;
        self
    }
}

/// A customer order placed in a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub campaign_id: Uuid,
    /// Absent for direct (non-seller) sales.
    pub seller_id: Option<Uuid>,
    pub total_cents: i64,
    pub fulfillment_status: FulfillmentStatus,
    pub payment_status: PaymentStatus,
}

impl Order {
    pub fn paid(campaign_id: Uuid, seller_id: Option<Uuid>, total_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            campaign_id,
            seller_id,
            total_cents,
            fulfillment_status: FulfillmentStatus::Pending,
            payment_status: PaymentStatus::Paid,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            CampaignStatus::Draft,
            CampaignStatus::Scheduled,
            CampaignStatus::Active,
            CampaignStatus::Closed,
            CampaignStatus::Fulfilled,
            CampaignStatus::Completed,
            CampaignStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<CampaignStatus>(), Ok(status));
        }
        assert_eq!(
            "in_production".parse::<FulfillmentStatus>(),
            Ok(FulfillmentStatus::InProduction)
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "archived".parse::<CampaignStatus>().unwrap_err();
        assert_eq!(err.kind, "campaign status");
        assert_eq!(err.to_string(), "Unknown campaign status: archived");
    }

    #[test]
    fn test_only_closed_and_fulfilled_expose_payouts() {
        assert!(CampaignStatus::Closed.exposes_payouts());
        assert!(CampaignStatus::Fulfilled.exposes_payouts());
        assert!(!CampaignStatus::Active.exposes_payouts());
        assert!(!CampaignStatus::Completed.exposes_payouts());
        assert!(!CampaignStatus::Draft.exposes_payouts());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let yaml = serde_yaml::to_string(&FulfillmentStatus::PickedUp).unwrap();
        assert_eq!(yaml.trim(), "picked_up");
    }
}
