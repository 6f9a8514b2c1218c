use serde::Deserialize;

use auctions_core::config::Config;
use auctions_core::tracing::LogFormat;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Pool size (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    /// Log every statement through tracing. Env var: `DATABASE_SQLX_LOGGING`.
    #[serde(default)]
    pub database_sqlx_logging: bool,
    /// `json` (default) or `pretty`. Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_max_connections() -> u32 {
    10
}

impl Config for CatalogConfig {}
