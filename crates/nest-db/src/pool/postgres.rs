//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use nest_common::config::DatabaseConfig;

/// Pool tuning knobs not exposed through the application config
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}

/// Run pending migrations from a directory against the pool
pub async fn run_migrations(
    pool: &PgPool,
    migrations_dir: &std::path::Path,
) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate::Migrator::new(migrations_dir).await?;
    migrator.run(pool).await
}
