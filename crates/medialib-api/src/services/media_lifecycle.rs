//! Media lifecycle operations: removal of stored objects and the metadata row.

use super::find_media_file;
use medialib_core::models::MediaFileId;
use medialib_core::AppError;
use medialib_db::MediaFileStore;
use medialib_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct MediaLifecycleService {
    store: Arc<dyn MediaFileStore>,
    media: Arc<dyn Storage>,
    thumbnails: Arc<dyn Storage>,
}

impl MediaLifecycleService {
    pub fn new(
        store: Arc<dyn MediaFileStore>,
        media: Arc<dyn Storage>,
        thumbnails: Arc<dyn Storage>,
    ) -> Self {
        Self {
            store,
            media,
            thumbnails,
        }
    }

    /// Delete the primary object, then the thumbnail object if one is recorded, then the row.
    ///
    /// A storage failure aborts before the row is touched; objects already removed stay removed.
    pub async fn delete(&self, id: MediaFileId) -> Result<(), AppError> {
        let file = find_media_file(self.store.as_ref(), id).await?;

        self.media.delete(&file.storage_key).await.map_err(|e| {
            tracing::error!(
                error = %e,
                media_id = %id,
                storage_key = %file.storage_key,
                "Failed to delete media object"
            );
            e
        })?;

        if let Some(thumbnail_key) = file.thumbnail_key.as_deref() {
            self.thumbnails.delete(thumbnail_key).await.map_err(|e| {
                tracing::error!(
                    error = %e,
                    media_id = %id,
                    thumbnail_key = %thumbnail_key,
                    "Failed to delete thumbnail object"
                );
                e
            })?;
        }

        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(super::MEDIA_NOT_FOUND.to_string()));
        }

        tracing::info!(media_id = %id, storage_key = %file.storage_key, "Media file deleted");
        Ok(())
    }
}
