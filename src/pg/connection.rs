/// Connection management for the client-server variant
///
/// Same shape as the file store: a pooled connection wrapper that ensures
/// the schema on open.

use crate::config::PgConfig;
use crate::error::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of database connections in the pool
const MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL-backed flight store
#[derive(Clone)]
pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    /// Connect to the configured server and ensure the schema exists
    pub async fn new(config: &PgConfig) -> Result<Self> {
        let options =
            PgConnectOptions::from_str(&config.database_url)?.disable_statement_logging();

        debug!("connecting to flight database server");

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Idempotently ensure the aircraft_types and flights tables exist
    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("../../database/schema_postgres.sql");

        for statement in schema.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool.as_ref()).await?;
            }
        }

        Ok(())
    }

    /// Get reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
