//! SQLite CampaignStore and OrderStore implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_query::{Expr, OnConflict, Order as SortOrder, Query, SqliteQueryBuilder};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::model::{Campaign, Order};
use crate::storage::schema::{
    Campaigns, Orders, CREATE_CAMPAIGNS_TABLE, CREATE_ORDERS_INDEX, CREATE_ORDERS_TABLE,
};
use crate::storage::{CampaignStore, OrderStore, Result, StorageError};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: Option<String>) -> Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(&v, DATE_FORMAT)
                .map_err(|e| StorageError::Corrupt(format!("date {:?}: {}", v, e)))
        })
        .transpose()
}

/// SQLite implementation of CampaignStore.
pub struct SqliteCampaignStore {
    pool: SqlitePool,
}

impl SqliteCampaignStore {
    /// Create a new SQLite campaign store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_CAMPAIGNS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

fn decode_campaign(row: &SqliteRow) -> Result<Campaign> {
    let id: String = row.get("id");
    let status: String = row.get("status");

    Ok(Campaign {
        id: Uuid::parse_str(&id)?,
        organization: row.get("organization"),
        name: row.get("name"),
        status: status.parse()?,
        starts_on: parse_date(row.get("starts_on"))?,
        ends_on: parse_date(row.get("ends_on"))?,
        florist_margin_percent: row.get("florist_margin_percent"),
        organization_margin_percent: row.get("organization_margin_percent"),
        platform_fee_percent: row.get("platform_fee_percent"),
    })
}

#[async_trait]
impl CampaignStore for SqliteCampaignStore {
    async fn get_campaign(&self, campaign_id: Uuid) -> Result<Option<Campaign>> {
        let query = Query::select()
            .columns([
                Campaigns::Id,
                Campaigns::Organization,
                Campaigns::Name,
                Campaigns::Status,
                Campaigns::StartsOn,
                Campaigns::EndsOn,
                Campaigns::FloristMarginPercent,
                Campaigns::OrganizationMarginPercent,
                Campaigns::PlatformFeePercent,
            ])
            .from(Campaigns::Table)
            .and_where(Expr::col(Campaigns::Id).eq(campaign_id.to_string()))
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_optional(&self.pool).await?;
        row.as_ref().map(decode_campaign).transpose()
    }

    async fn put_campaign(&self, campaign: &Campaign) -> Result<()> {
        let query = Query::insert()
            .into_table(Campaigns::Table)
            .columns([
                Campaigns::Id,
                Campaigns::Organization,
                Campaigns::Name,
                Campaigns::Status,
                Campaigns::StartsOn,
                Campaigns::EndsOn,
                Campaigns::FloristMarginPercent,
                Campaigns::OrganizationMarginPercent,
                Campaigns::PlatformFeePercent,
            ])
            .values_panic([
                campaign.id.to_string().into(),
                campaign.organization.clone().into(),
                campaign.name.clone().into(),
                campaign.status.as_str().into(),
                campaign
                    .starts_on
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .into(),
                campaign
                    .ends_on
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .into(),
                campaign.florist_margin_percent.into(),
                campaign.organization_margin_percent.into(),
                campaign.platform_fee_percent.into(),
            ])
            .on_conflict(
                OnConflict::column(Campaigns::Id)
                    .update_columns([
                        Campaigns::Organization,
                        Campaigns::Name,
                        Campaigns::Status,
                        Campaigns::StartsOn,
                        Campaigns::EndsOn,
                        Campaigns::FloristMarginPercent,
                        Campaigns::OrganizationMarginPercent,
                        Campaigns::PlatformFeePercent,
                    ])
                    .to_owned(),
            )
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }
}

/// SQLite implementation of OrderStore.
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Create a new SQLite order store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_ORDERS_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn decode_order(row: &SqliteRow) -> Result<Order> {
    let id: String = row.get("id");
    let campaign_id: String = row.get("campaign_id");
    let seller_id: Option<String> = row.get("seller_id");
    let fulfillment: String = row.get("fulfillment_status");
    let payment: String = row.get("payment_status");

    Ok(Order {
        id: Uuid::parse_str(&id)?,
        campaign_id: Uuid::parse_str(&campaign_id)?,
        seller_id: seller_id.map(|s| Uuid::parse_str(&s)).transpose()?,
        total_cents: row.get("total_cents"),
        fulfillment_status: fulfillment.parse()?,
        payment_status: payment.parse()?,
    })
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn list_orders(&self, campaign_id: Uuid) -> Result<Vec<Order>> {
        let query = Query::select()
            .columns([
                Orders::Id,
                Orders::CampaignId,
                Orders::SellerId,
                Orders::TotalCents,
                Orders::FulfillmentStatus,
                Orders::PaymentStatus,
            ])
            .from(Orders::Table)
            .and_where(Expr::col(Orders::CampaignId).eq(campaign_id.to_string()))
            .order_by(Orders::Id, SortOrder::Asc)
            .to_string(SqliteQueryBuilder);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(decode_order).collect()
    }

    async fn put_order(&self, order: &Order) -> Result<()> {
        let query = Query::insert()
            .into_table(Orders::Table)
            .columns([
                Orders::Id,
                Orders::CampaignId,
                Orders::SellerId,
                Orders::TotalCents,
                Orders::FulfillmentStatus,
                Orders::PaymentStatus,
            ])
            .values_panic([
                order.id.to_string().into(),
                order.campaign_id.to_string().into(),
                order.seller_id.map(|s| s.to_string()).into(),
                order.total_cents.into(),
                order.fulfillment_status.as_str().into(),
                order.payment_status.as_str().into(),
            ])
            .on_conflict(
                OnConflict::column(Orders::Id)
                    .update_columns([
                        Orders::CampaignId,
                        Orders::SellerId,
                        Orders::TotalCents,
                        Orders::FulfillmentStatus,
                        Orders::PaymentStatus,
                    ])
                    .to_owned(),
            )
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }
}
