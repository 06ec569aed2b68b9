#[cfg(feature = "storage-local")]
use crate::{LocalStorage, UrlSigner};
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use medialib_core::{Bucket, Config};
use std::sync::Arc;

/// The two buckets the service works with
#[derive(Clone)]
pub struct StorageSet {
    pub media: Arc<dyn Storage>,
    pub thumbnails: Arc<dyn Storage>,
    /// Present when objects live on the local filesystem and are served by this process.
    #[cfg(feature = "storage-local")]
    pub local: Option<LocalFiles>,
}

impl StorageSet {
    pub fn bucket(&self, bucket: Bucket) -> &Arc<dyn Storage> {
        match bucket {
            Bucket::Media => &self.media,
            Bucket::Thumbnails => &self.thumbnails,
        }
    }

    pub fn backend_type(&self) -> StorageBackend {
        self.media.backend_type()
    }
}

/// Concrete local buckets, needed by the routes that accept signed uploads and downloads.
#[cfg(feature = "storage-local")]
#[derive(Clone)]
pub struct LocalFiles {
    pub media: Arc<LocalStorage>,
    pub thumbnails: Arc<LocalStorage>,
}

#[cfg(feature = "storage-local")]
impl LocalFiles {
    pub fn bucket(&self, bucket: Bucket) -> &LocalStorage {
        match bucket {
            Bucket::Media => &self.media,
            Bucket::Thumbnails => &self.thumbnails,
        }
    }
}

/// Create the media and thumbnail buckets based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<StorageSet> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let region = config.s3_region().map(String::from).ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let bucket_name = |name: &Option<String>, var: &str| {
                name.clone()
                    .ok_or_else(|| StorageError::ConfigError(format!("{} not configured", var)))
            };

            let media = S3Storage::new(
                bucket_name(&config.s3_bucket, "S3_BUCKET")?,
                region.clone(),
                config.s3_endpoint.clone(),
            )?;
            let thumbnails = S3Storage::new(
                bucket_name(&config.s3_thumbnail_bucket, "S3_THUMBNAIL_BUCKET")?,
                region,
                config.s3_endpoint.clone(),
            )?;

            Ok(StorageSet {
                media: Arc::new(media),
                thumbnails: Arc::new(thumbnails),
                #[cfg(feature = "storage-local")]
                local: None,
            })
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;
            let secret = config.local_url_signing_secret.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_URL_SIGNING_SECRET not configured".to_string())
            })?;

            let local = create_local_files(base_path, &base_url, UrlSigner::new(secret)).await?;
            Ok(StorageSet {
                media: local.media.clone(),
                thumbnails: local.thumbnails.clone(),
                local: Some(local),
            })
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}

/// Lay out `{root}/media` and `{root}/thumbnails`, signing links under `{base_url}/files/{bucket}`.
#[cfg(feature = "storage-local")]
pub async fn create_local_files(
    root: impl Into<std::path::PathBuf>,
    base_url: &str,
    signer: UrlSigner,
) -> StorageResult<LocalFiles> {
    let root = root.into();
    let base_url = base_url.trim_end_matches('/');

    let open = |bucket: Bucket| {
        LocalStorage::new(
            root.join(bucket.as_str()),
            format!("{}/files/{}", base_url, bucket),
            bucket,
            signer.clone(),
        )
    };

    Ok(LocalFiles {
        media: Arc::new(open(Bucket::Media).await?),
        thumbnails: Arc::new(open(Bucket::Thumbnails).await?),
    })
}
