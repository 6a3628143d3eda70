use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

/// An in-memory SQLite database lives as long as its last connection, so the
/// pool must never recycle it.
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool settings for the person store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub url: String,
    pub max_conns: u32,
    pub sqlx_logging: bool,
}

impl StoreOptions {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_conns: 1,
            sqlx_logging: false,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    fn to_connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.max_conns.max(1))
            .min_connections(1)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .sqlx_logging(self.sqlx_logging);
        if self.is_in_memory() {
            // Every extra pooled connection would open its own empty database.
            opts.max_connections(1)
                .idle_timeout(IN_MEMORY_LIFETIME)
                .max_lifetime(IN_MEMORY_LIFETIME);
        }
        opts
    }
}

/// Open the store and apply connection pragmas.
pub async fn connect(options: &StoreOptions) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(options.to_connect_options())
        .await
        .with_context(|| format!("failed to connect to {}", options.url))?;

    if !options.is_in_memory() {
        // Persistent across connections for a file database.
        db.execute_unprepared("PRAGMA journal_mode = WAL")
            .await
            .context("failed to enable WAL journal mode")?;
    }

    tracing::info!(url = %options.url, in_memory = options.is_in_memory(), "Store connected");
    Ok(db)
}
