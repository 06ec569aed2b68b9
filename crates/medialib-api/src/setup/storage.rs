//! Storage initialization

use anyhow::{Context, Result};
use medialib_core::Config;
use medialib_storage::{create_storage, StorageSet};

/// Build the media and thumbnail buckets for the configured backend
pub async fn setup_storage(config: &Config) -> Result<StorageSet> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    match config.storage_backend {
        medialib_core::StorageBackend::S3 => tracing::info!(
            media_bucket = config.s3_bucket.as_deref().unwrap_or_default(),
            thumbnail_bucket = config.s3_thumbnail_bucket.as_deref().unwrap_or_default(),
            region = config.s3_region().unwrap_or_default(),
            endpoint = config.s3_endpoint.as_deref().unwrap_or("aws"),
            "S3 storage initialized"
        ),
        medialib_core::StorageBackend::Local => tracing::info!(
            path = config.local_storage_path.as_deref().unwrap_or_default(),
            base_url = config.local_storage_base_url.as_deref().unwrap_or_default(),
            "Local storage initialized"
        ),
    }

    Ok(storage)
}
