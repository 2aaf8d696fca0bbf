//! Storage configuration types.

use serde::Deserialize;

/// Storage type discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// In-process maps. Nothing survives a restart.
    #[default]
    Memory,
    Sqlite,
}

/// Storage configuration (discriminated union).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage type discriminator.
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    /// SQLite-specific configuration.
    pub sqlite: SqliteConfig,
}

/// SQLite-specific configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Database file path, or `:memory:` for a private in-memory database.
    pub path: String,
}

impl SqliteConfig {
    pub fn is_memory(&self) -> bool {
        self.path == SQLITE_MEMORY_PATH
    }
}

/// Path value selecting an in-memory SQLite database.
pub const SQLITE_MEMORY_PATH: &str = ":memory:";

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: "data/bloomfund.db".to_string(),
        }
    }
}
