//! Time-limited signed URLs for reading stored media.

use super::find_media_file;
use medialib_core::constants::ACCESS_URL_TTL;
use medialib_core::models::{DownloadUrlResponse, MediaFile, MediaFileId, PreviewUrlResponse};
use medialib_core::AppError;
use medialib_db::MediaFileStore;
use medialib_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccessUrlService {
    store: Arc<dyn MediaFileStore>,
    media: Arc<dyn Storage>,
    thumbnails: Arc<dyn Storage>,
}

impl AccessUrlService {
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

    pub async fn download_url(&self, id: MediaFileId) -> Result<DownloadUrlResponse, AppError> {
        let file = find_media_file(self.store.as_ref(), id).await?;
        let download_url = self
            .media
            .get_presigned_url(&file.storage_key, ACCESS_URL_TTL)
            .await?;

        Ok(DownloadUrlResponse {
            download_url,
            filename: file.original_filename,
            mime_type: file.mime_type,
            file_size: file.file_size,
        })
    }

    /// Videos with a recorded thumbnail preview through the thumbnail bucket; everything else
    /// previews the primary object.
    pub async fn preview_url(&self, id: MediaFileId) -> Result<PreviewUrlResponse, AppError> {
        let file = find_media_file(self.store.as_ref(), id).await?;
        let preview_url = match preview_thumbnail(&file) {
            Some(thumbnail_key) => {
                self.thumbnails
                    .get_presigned_url(thumbnail_key, ACCESS_URL_TTL)
                    .await?
            }
            None => {
                self.media
                    .get_presigned_url(&file.storage_key, ACCESS_URL_TTL)
                    .await?
            }
        };

        Ok(PreviewUrlResponse {
            preview_url,
            mime_type: file.mime_type,
            width: file.width,
            height: file.height,
            duration: file.duration,
        })
    }
}

fn preview_thumbnail(file: &MediaFile) -> Option<&str> {
    if file.mime_type.starts_with("video/") {
        file.thumbnail_key.as_deref()
    } else {
        None
    }
}
