//! SQLite SellerStore implementation.

use async_trait::async_trait;
use sea_query::{Expr, OnConflict, Order, Query, SqliteQueryBuilder};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::model::CampaignSeller;
use crate::storage::schema::{CampaignSellers, CREATE_CAMPAIGN_SELLERS_INDEX, CREATE_CAMPAIGN_SELLERS_TABLE};
use crate::storage::{Result, SellerStore, StorageError};

/// SQLite implementation of SellerStore.
pub struct SqliteSellerStore {
    pool: SqlitePool,
}

impl SqliteSellerStore {
    /// Create a new SQLite seller store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the table and index if they do not exist.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_CAMPAIGN_SELLERS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_CAMPAIGN_SELLERS_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn decode_seller(row: &SqliteRow) -> Result<CampaignSeller> {
    let id: String = row.get("id");
    let campaign_id: String = row.get("campaign_id");
    let order_count: i64 = row.get("order_count");

    Ok(CampaignSeller {
        id: Uuid::parse_str(&id)?,
        campaign_id: Uuid::parse_str(&campaign_id)?,
        name: row.get("name"),
        total_sales_cents: row.get("total_sales_cents"),
        order_count: u32::try_from(order_count)
            .map_err(|_| StorageError::Corrupt(format!("seller {} order_count {}", id, order_count)))?,
        personal_goal_cents: row.get("personal_goal_cents"),
    })
}

fn select_sellers() -> sea_query::SelectStatement {
    Query::select()
        .columns([
            CampaignSellers::Id,
            CampaignSellers::CampaignId,
            CampaignSellers::Name,
            CampaignSellers::TotalSalesCents,
            CampaignSellers::OrderCount,
            CampaignSellers::PersonalGoalCents,
        ])
        .from(CampaignSellers::Table)
        .to_owned()
}

#[async_trait]
impl SellerStore for SqliteSellerStore {
    async fn list_sellers(&self, campaign_id: Uuid) -> Result<Vec<CampaignSeller>> {
        let query = select_sellers()
            .and_where(Expr::col(CampaignSellers::CampaignId).eq(campaign_id.to_string()))
            .order_by(CampaignSellers::Id, Order::Asc)
            .to_string(SqliteQueryBuilder);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(decode_seller).collect()
    }

    async fn get_seller(&self, seller_id: Uuid) -> Result<Option<CampaignSeller>> {
        let query = select_sellers()
            .and_where(Expr::col(CampaignSellers::Id).eq(seller_id.to_string()))
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_optional(&self.pool).await?;
        row.as_ref().map(decode_seller).transpose()
    }

    async fn put_seller(&self, seller: &CampaignSeller) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        let query = Query::insert()
            .into_table(CampaignSellers::Table)
            .columns([
                CampaignSellers::Id,
                CampaignSellers::CampaignId,
                CampaignSellers::Name,
                CampaignSellers::TotalSalesCents,
                CampaignSellers::OrderCount,
                CampaignSellers::PersonalGoalCents,
                CampaignSellers::UpdatedAt,
            ])
            .values_panic([
                seller.id.to_string().into(),
                seller.campaign_id.to_string().into(),
                seller.name.clone().into(),
                seller.total_sales_cents.into(),
                i64::from(seller.order_count).into(),
                seller.personal_goal_cents.into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::column(CampaignSellers::Id)
                    .update_columns([
                        CampaignSellers::CampaignId,
                        CampaignSellers::Name,
                        CampaignSellers::TotalSalesCents,
                        CampaignSellers::OrderCount,
                        CampaignSellers::PersonalGoalCents,
                        CampaignSellers::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_string(SqliteQueryBuilder);

        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }

    async fn set_personal_goal(&self, seller_id: Uuid, goal_cents: Option<i64>) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        let query = Query::update()
            .table(CampaignSellers::Table)
            .value(CampaignSellers::PersonalGoalCents, goal_cents)
            .value(CampaignSellers::UpdatedAt, updated_at)
            .and_where(Expr::col(CampaignSellers::Id).eq(seller_id.to_string()))
            .to_string(SqliteQueryBuilder);

        let result = sqlx::query(&query).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::SellerNotFound(seller_id));
        }
        Ok(())
    }
}
