//! Storage configuration loaded from environment variables.

use std::env;

use crate::database::DatabaseConfig;

/// Where records are kept.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl StorageConfig {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(lookup("DB_MAX_CONNECTIONS"), 10),
            min_connections: parse_or(lookup("DB_MIN_CONNECTIONS"), 1),
        });

        Self { database }
    }
}

fn parse_or(value: Option<String>, default: u32) -> u32 {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}
