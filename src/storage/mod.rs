//! Storage implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageConfig, StorageType};

pub use crate::interfaces::{CampaignStore, OrderStore, Result, SellerStore, StorageError};

pub mod mock;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use mock::{MockCampaignStore, MockOrderStore, MockSellerStore};
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteCampaignStore, SqliteOrderStore, SqliteSellerStore};

/// The set of stores the services read from and write to.
#[derive(Clone)]
pub struct Stores {
    pub sellers: Arc<dyn SellerStore>,
    pub campaigns: Arc<dyn CampaignStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl Stores {
    /// Fresh in-memory stores.
    pub fn memory() -> Self {
        Self {
            sellers: Arc::new(MockSellerStore::new()),
            campaigns: Arc::new(MockCampaignStore::new()),
            orders: Arc::new(MockOrderStore::new()),
        }
    }

    /// SQLite stores over an existing pool. Tables are created if missing.
    #[cfg(feature = "sqlite")]
    pub async fn sqlite(pool: sqlx::SqlitePool) -> Result<Self> {
        let sellers = SqliteSellerStore::new(pool.clone());
        sellers.init().await?;

        let campaigns = SqliteCampaignStore::new(pool.clone());
        campaigns.init().await?;

        let orders = SqliteOrderStore::new(pool);
        orders.init().await?;

        Ok(Self {
            sellers: Arc::new(sellers),
            campaigns: Arc::new(campaigns),
            orders: Arc::new(orders),
        })
    }
}

/// Open a SQLite pool for the configured path.
///
/// `:memory:` gets a single connection that is never reaped, so every
/// query sees the same database for the life of the pool.
#[cfg(feature = "sqlite")]
pub async fn connect_sqlite(config: &crate::config::SqliteConfig) -> Result<sqlx::SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    if config.is_memory() {
        return Ok(SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?);
    }

    if let Some(parent) = std::path::Path::new(&config.path).parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StorageError::Unavailable(format!("{}: {}", parent.display(), e)))?;
    }

    Ok(sqlx::SqlitePool::connect(&format!("sqlite:{}?mode=rwc", config.path)).await?)
}

/// Initialize storage based on configuration.
pub async fn init_storage(config: &StorageConfig) -> Result<Stores> {
    match config.storage_type {
        StorageType::Memory => {
            info!("Storage: memory");
            Ok(Stores::memory())
        }
        #[cfg(feature = "sqlite")]
        StorageType::Sqlite => {
            info!("Storage: sqlite at {}", config.sqlite.path);
            let pool = connect_sqlite(&config.sqlite).await?;
            Stores::sqlite(pool).await
        }
        #[cfg(not(feature = "sqlite"))]
        StorageType::Sqlite => {
            tracing::error!("SQLite storage requested but 'sqlite' feature is not enabled");
            Err(StorageError::Unavailable("sqlite feature not enabled".to_string()))
        }
    }
}
