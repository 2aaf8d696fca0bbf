//! Campaign-wide order figures for the organizer dashboard.

use serde::{Deserialize, Serialize};

use crate::model::{FulfillmentStatus, Order};

/// Sum of paid order totals. This is the revenue payouts are split from.
pub fn campaign_revenue_cents(orders: &[Order]) -> i64 {
    orders
        .iter()
        .filter(|o| o.is_paid())
        .map(|o| o.total_cents)
        .sum()
}

/// Paid orders per fulfillment stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentBreakdown {
    pub pending: u32,
    pub in_production: u32,
    pub ready: u32,
    pub picked_up: u32,
    pub delivered: u32,
}

impl FulfillmentBreakdown {
    fn record(&mut self, status: FulfillmentStatus) {
        let slot = match status {
            FulfillmentStatus::Pending => &mut self.pending,
            FulfillmentStatus::InProduction => &mut self.in_production,
            FulfillmentStatus::Ready => &mut self.ready,
            FulfillmentStatus::PickedUp => &mut self.picked_up,
            FulfillmentStatus::Delivered => &mut self.delivered,
        };
        *slot += 1;
    }

    /// Orders that have left the florist.
    pub fn handed_over(&self) -> u32 {
        self.picked_up + self.delivered
    }

    /// Orders still awaiting pickup or delivery.
    pub fn outstanding(&self) -> u32 {
        self.pending + self.in_production + self.ready
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub total_revenue_cents: i64,
    pub paid_order_count: u32,
    /// Integer cents, rounded down. Zero when there are no paid orders.
    pub average_order_cents: i64,
    /// Revenue from orders not attributed to any seller.
    pub direct_revenue_cents: i64,
    pub seller_count: usize,
    pub fulfillment: FulfillmentBreakdown,
}

impl CampaignSummary {
    pub fn from_orders(orders: &[Order], seller_count: usize) -> Self {
        let mut summary = Self {
            seller_count,
            ..Self::default()
        };

        for order in orders.iter().filter(|o| o.is_paid()) {
            summary.total_revenue_cents += order.total_cents;
            summary.paid_order_count += 1;
            if order.seller_id.is_none() {
                summary.direct_revenue_cents += order.total_cents;
            }
            summary.fulfillment.record(order.fulfillment_status);
        }

        if summary.paid_order_count > 0 {
            summary.average_order_cents =
                summary.total_revenue_cents / i64::from(summary.paid_order_count);
        }
        summary
    }
}
