//! Seller sales totals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{CampaignSeller, Order};

/// Cumulative paid sales of one seller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales_cents: i64,
    pub order_count: u32,
}

impl SalesSummary {
    /// Use the counters maintained by order processing. A negative sales
    /// counter is treated as zero.
    pub fn from_seller(seller: &CampaignSeller) -> Self {
        Self {
            total_sales_cents: seller.total_sales_cents.max(0),
            order_count: seller.order_count,
        }
    }

    /// Recompute from order rows instead of trusting the cached counters.
    ///
    /// Only paid orders attributed to `seller_id` are counted.
    pub fn from_orders(seller_id: Uuid, orders: &[Order]) -> Self {
        orders
            .iter()
            .filter(|o| o.seller_id == Some(seller_id) && o.is_paid())
            .fold(Self::default(), |acc, o| Self {
                total_sales_cents: acc.total_sales_cents + o.total_cents,
                order_count: acc.order_count + 1,
            })
    }

    /// False for a seller who has not sold anything yet.
    pub fn has_sales(&self) -> bool {
        self.total_sales_cents > 0 || self.order_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentStatus;

    #[test]
    fn test_from_seller_passes_counters_through() {
        let seller = CampaignSeller::new(Uuid::new_v4(), "Ada").with_sales(12_500, 4);
        let summary = SalesSummary::from_seller(&seller);
        assert_eq!(summary.total_sales_cents, 12_500);
        assert_eq!(summary.order_count, 4);
        assert!(summary.has_sales());
    }

    #[test]
    fn test_no_orders_is_zero() {
        let summary = SalesSummary::from_orders(Uuid::new_v4(), &[]);
        assert_eq!(summary, SalesSummary::default());
        assert!(!summary.has_sales());
    }

    #[test]
    fn test_from_orders_counts_only_paid_attributed_orders() {
        let campaign = Uuid::new_v4();
        let seller = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut unpaid = Order::paid(campaign, Some(seller), 9_900);
        unpaid.payment_status = PaymentStatus::Pending;

        let orders = vec![
            Order::paid(campaign, Some(seller), 2_500),
            Order::paid(campaign, Some(seller), 4_000),
            Order::paid(campaign, Some(other), 7_000),
            Order::paid(campaign, None, 1_000),
            unpaid,
        ];

        let summary = SalesSummary::from_orders(seller, &orders);
        assert_eq!(summary.total_sales_cents, 6_500);
        assert_eq!(summary.order_count, 2);
    }
}
