//! Database schema definitions using sea-query.
//!
//! These define the table and column identifiers for type-safe query building.

use sea_query::Iden;

/// Campaigns table schema.
#[derive(Iden)]
pub enum Campaigns {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "organization"]
    Organization,
    #[iden = "name"]
    Name,
    #[iden = "status"]
    Status,
    #[iden = "starts_on"]
    StartsOn,
    #[iden = "ends_on"]
    EndsOn,
    #[iden = "florist_margin_percent"]
    FloristMarginPercent,
    #[iden = "organization_margin_percent"]
    OrganizationMarginPercent,
    #[iden = "platform_fee_percent"]
    PlatformFeePercent,
}

/// Campaign sellers table schema.
#[derive(Iden)]
pub enum CampaignSellers {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "campaign_id"]
    CampaignId,
    #[iden = "name"]
    Name,
    #[iden = "total_sales_cents"]
    TotalSalesCents,
    #[iden = "order_count"]
    OrderCount,
    #[iden = "personal_goal_cents"]
    PersonalGoalCents,
    #[iden = "updated_at"]
    UpdatedAt,
}

/// Orders table schema.
#[derive(Iden)]
pub enum Orders {
    Table,
    #[iden = "id"]
    Id,
    #[iden = "campaign_id"]
    CampaignId,
    #[iden = "seller_id"]
    SellerId,
    #[iden = "total_cents"]
    TotalCents,
    #[iden = "fulfillment_status"]
    FulfillmentStatus,
    #[iden = "payment_status"]
    PaymentStatus,
}

/// SQL for creating the campaigns table.
pub const CREATE_CAMPAIGNS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS campaigns (
    id TEXT PRIMARY KEY NOT NULL,
    organization TEXT NOT NULL,
    name TEXT NOT NULL,
    status TEXT NOT NULL,
    starts_on TEXT,
    ends_on TEXT,
    florist_margin_percent REAL NOT NULL DEFAULT 0,
    organization_margin_percent REAL NOT NULL DEFAULT 0,
    platform_fee_percent REAL
);
"#;

/// SQL for creating the campaign sellers table.
pub const CREATE_CAMPAIGN_SELLERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS campaign_sellers (
    id TEXT PRIMARY KEY NOT NULL,
    campaign_id TEXT NOT NULL,
    name TEXT NOT NULL,
    total_sales_cents INTEGER NOT NULL DEFAULT 0,
    order_count INTEGER NOT NULL DEFAULT 0,
    personal_goal_cents INTEGER,
    updated_at TEXT NOT NULL
);
"#;

pub const CREATE_CAMPAIGN_SELLERS_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_campaign_sellers_campaign ON campaign_sellers(campaign_id);
"#;

/// SQL for creating the orders table.
pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id TEXT PRIMARY KEY NOT NULL,
    campaign_id TEXT NOT NULL,
    seller_id TEXT,
    total_cents INTEGER NOT NULL,
    fulfillment_status TEXT NOT NULL,
    payment_status TEXT NOT NULL
);
"#;

pub const CREATE_ORDERS_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_orders_campaign ON orders(campaign_id);
"#;
