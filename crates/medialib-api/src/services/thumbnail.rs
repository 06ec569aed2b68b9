use medialib_core::models::{FileType, MediaFileId, ThumbnailResponse};
use medialib_core::AppError;
use medialib_db::MediaFileStore;
use medialib_storage::keys::thumbnail_key;
use std::sync::Arc;

const VIDEO_NOT_FOUND: &str = "Video file not found";

/// Records the thumbnail key for a video. No image is rendered, so the key points at an object
/// that does not exist yet and previews of it fail until something writes it.
#[derive(Clone)]
pub struct ThumbnailService {
    store: Arc<dyn MediaFileStore>,
}

impl ThumbnailService {
    pub fn new(store: Arc<dyn MediaFileStore>) -> Self {
        Self { store }
    }

    pub async fn generate(&self, id: MediaFileId) -> Result<ThumbnailResponse, AppError> {
        let file = self
            .store
            .get(id)
            .await?
            .filter(|file| file.file_type == FileType::Video)
            .ok_or_else(|| AppError::NotFound(VIDEO_NOT_FOUND.to_string()))?;

        let key = thumbnail_key(&file.storage_key);
        if !self.store.set_thumbnail_key(id, &key).await? {
            return Err(AppError::NotFound(VIDEO_NOT_FOUND.to_string()));
        }

        tracing::info!(media_id = %id, thumbnail_key = %key, "Thumbnail key recorded");

        Ok(ThumbnailResponse {
            thumbnail_key: key,
            success: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::new_media_file;
    use medialib_db::test_helpers::MemoryMediaFileStore;

    #[tokio::test]
    async fn test_generate_is_deterministic() {
        let store = MemoryMediaFileStore::new();
        let video = store
            .insert(new_media_file("3f2a.mp4", "video/mp4"))
            .await
            .unwrap();
        let service = ThumbnailService::new(Arc::new(store.clone()));

        let first = service.generate(video.id).await.unwrap();
        let second = service.generate(video.id).await.unwrap();
        assert_eq!(first.thumbnail_key, "thumb_3f2a.jpg");
        assert_eq!(first.thumbnail_key, second.thumbnail_key);
        assert!(first.success);

        let stored = store.get(video.id).await.unwrap().unwrap();
        assert_eq!(stored.thumbnail_key.as_deref(), Some("thumb_3f2a.jpg"));
    }

    #[tokio::test]
    async fn test_images_and_unknown_ids_are_not_found() {
        let store = MemoryMediaFileStore::new();
        let image = store
            .insert(new_media_file("a.png", "image/png"))
            .await
            .unwrap();
        let service = ThumbnailService::new(Arc::new(store.clone()));

        for id in [image.id, MediaFileId(404)] {
            match service.generate(id).await {
                Err(AppError::NotFound(msg)) => assert_eq!(msg, "Video file not found"),
                other => panic!("Expected NotFound, got {:?}", other),
            }
        }
        let untouched = store.get(image.id).await.unwrap().unwrap();
        assert!(untouched.thumbnail_key.is_none());
    }
}
