//! Application state and sub-state extractors.
//!
//! Handlers extract only the slice they need via Axum's `FromRef`.

use crate::services::{
    AccessUrlService, CatalogService, MediaLifecycleService, ThumbnailService, UploadCoordinator,
};
use medialib_core::{Config, StorageBackend};
use medialib_db::MediaFileStore;
use medialib_storage::{LocalFiles, StorageSet};
use std::sync::Arc;

/// Media workflows, all sharing one metadata store and one pair of buckets.
#[derive(Clone)]
pub struct MediaState {
    pub uploads: UploadCoordinator,
    pub catalog: CatalogService,
    pub access: AccessUrlService,
    pub thumbnails: ThumbnailService,
    pub lifecycle: MediaLifecycleService,
}

impl MediaState {
    pub fn new(store: Arc<dyn MediaFileStore>, storage: &StorageSet) -> Self {
        Self {
            uploads: UploadCoordinator::new(store.clone(), storage.media.clone()),
            catalog: CatalogService::new(store.clone()),
            access: AccessUrlService::new(
                store.clone(),
                storage.media.clone(),
                storage.thumbnails.clone(),
            ),
            thumbnails: ThumbnailService::new(store.clone()),
            lifecycle: MediaLifecycleService::new(
                store,
                storage.media.clone(),
                storage.thumbnails.clone(),
            ),
        }
    }
}

/// Dependencies probed by the health endpoints.
#[derive(Clone)]
pub struct HealthState {
    pub store: Arc<dyn MediaFileStore>,
    pub storage_backend: StorageBackend,
}

/// Local buckets served by this process; `None` when objects live in S3.
#[derive(Clone)]
pub struct FileState {
    pub local: Option<LocalFiles>,
    /// Largest body accepted by a signed PUT.
    pub max_upload_bytes: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub media: MediaState,
    pub health: HealthState,
    pub files: FileState,
}

impl AppState {
    pub fn new(
        config: &Config,
        store: Arc<dyn MediaFileStore>,
        storage: StorageSet,
    ) -> Arc<Self> {
        Arc::new(Self {
            media: MediaState::new(store.clone(), &storage),
            health: HealthState {
                store,
                storage_backend: storage.backend_type(),
            },
            files: FileState {
                local: storage.local,
                max_upload_bytes: config.local_max_upload_bytes as u64,
            },
        })
    }
}

impl axum::extract::FromRef<Arc<AppState>> for MediaState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.media.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for HealthState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.health.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for FileState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.files.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
