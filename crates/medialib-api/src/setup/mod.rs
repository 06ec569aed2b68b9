//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use medialib_core::Config;
use medialib_db::MediaFileRepository;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.is_production())
        .context("Failed to initialize telemetry")?;

    tracing::info!(
        environment = %config.environment(),
        storage_backend = %config.storage_backend,
        "Configuration loaded and validated successfully"
    );

    let pool = database::setup_database(config).await?;
    let storage = storage::setup_storage(config).await?;

    let state = AppState::new(config, Arc::new(MediaFileRepository::new(pool)), storage);
    let router = routes::setup_routes(config, state.clone())?;

    Ok((state, router))
}
