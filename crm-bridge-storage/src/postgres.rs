use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Connection settings for the legacy CRM database.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub application_name: String,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Some(Duration::from_secs(600)),
            application_name: "crm-bridge".to_string(),
        }
    }
}

impl PostgresConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min.min(self.max_connections);
        self
    }
}

/// Opens the connection pool used by the list view adapter.
pub async fn create_pool(config: &PostgresConfig) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(&config.database_url)
        .context("invalid database url")?
        .application_name(&config.application_name);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_with(options)
        .await
        .context("failed to connect to the legacy database")?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "PostgreSQL connection pool created"
    );

    Ok(pool)
}

pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;

    tracing::debug!("Database health check passed");
    Ok(())
}

pub fn pool_status(pool: &PgPool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle();
    PoolStatus {
        size,
        idle,
        active: (size as usize).saturating_sub(idle),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
    pub active: usize,
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool(size: {}, active: {}, idle: {})",
            self.size, self.active, self.idle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_connections_capped_by_max() {
        let config = PostgresConfig::new("postgres://localhost/crm")
            .with_max_connections(4)
            .with_min_connections(8);

        assert_eq!(config.min_connections, 4);
        assert_eq!(config.application_name, "crm-bridge");
    }

    #[test]
    fn test_pool_status_display() {
        let status = PoolStatus {
            size: 5,
            idle: 3,
            active: 2,
        };
        assert_eq!(status.to_string(), "Pool(size: 5, active: 2, idle: 3)");
    }
}
