//! PostgreSQL connection pool setup

use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

/// Open a bounded connection pool against the configured database.
///
/// Connection failures propagate; a run that cannot reach the database
/// sends nothing and is retried on the next cycle.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    info!(
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!("Database connection pool established");
    Ok(pool)
}
