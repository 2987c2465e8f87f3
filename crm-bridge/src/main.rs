use anyhow::{Context, Result};
use crm_bridge_api::observability::{init_logging, request_logging_middleware, LogConfig};
use crm_bridge_api::AppState;
use crm_bridge_core::{
    BeanRegistry, LegacyScopeState, ListViewDataPort, RecordListHandler, RouteConverterHandler,
};
use crm_bridge_storage::postgres::{create_pool, health_check, pool_status, PostgresConfig};
use crm_bridge_storage::{InMemoryListViewData, PostgresListViewData};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod config;

use config::{Config, DataSource};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_logging(LogConfig::new(config.log_level.clone(), config.log_format))
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {}", err))?;

    tracing::info!(data_source = ?config.data_source, "Starting CRM bridge");

    let data_port = build_data_port(&config).await?;
    let scope = LegacyScopeState::new(config.legacy.scope_config());
    let record_lists = RecordListHandler::new(scope, Arc::new(BeanRegistry::builtin()), data_port)
        .with_default_limit(config.default_page_size);

    let mut state = AppState::new(
        Arc::new(record_lists),
        Arc::new(RouteConverterHandler::default()),
    );
    if let Some(base_path) = &config.base_path {
        state = state.with_base_path(base_path.clone());
    }

    let app = crm_bridge_api::routes(state)
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_data_port(config: &Config) -> Result<Arc<dyn ListViewDataPort>> {
    match config.data_source {
        DataSource::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("database_url is not set")?;
            let pool = create_pool(&PostgresConfig::new(url)).await?;
            health_check(&pool).await?;
            tracing::info!(pool = %pool_status(&pool), "Database pool initialized");

            Ok(Arc::new(PostgresListViewData::new(pool)))
        }
        DataSource::Memory => match &config.fixtures_path {
            Some(path) => Ok(Arc::new(InMemoryListViewData::from_fixtures_file(path).await?)),
            None => {
                tracing::warn!("No fixtures configured, serving empty list views");
                Ok(Arc::new(InMemoryListViewData::new()))
            }
        },
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
