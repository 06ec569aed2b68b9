//! Two-phase direct upload: hand out a signed PUT URL, then record the row once the client
//! reports the upload finished.

use medialib_core::constants::UPLOAD_URL_TTL;
use medialib_core::models::{
    CompleteUploadRequest, FileType, MediaFile, NewMediaFile, UploadUrlRequest, UploadUrlResponse,
};
use medialib_core::AppError;
use medialib_db::MediaFileStore;
use medialib_storage::keys::media_storage_key;
use medialib_storage::Storage;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct UploadCoordinator {
    store: Arc<dyn MediaFileStore>,
    media: Arc<dyn Storage>,
}

/// Clients report 0 for dimensions they could not derive.
fn positive<T: PartialOrd + Default>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v > T::default())
}

impl UploadCoordinator {
    pub fn new(store: Arc<dyn MediaFileStore>, media: Arc<dyn Storage>) -> Self {
        Self { store, media }
    }

    /// Issue an upload intent. No row is written until [`Self::complete_upload`].
    pub async fn create_upload_url(
        &self,
        request: UploadUrlRequest,
    ) -> Result<UploadUrlResponse, AppError> {
        let file_id = Uuid::new_v4();
        let storage_key = media_storage_key(file_id, &request.filename);

        let upload_url = self
            .media
            .presigned_put_url(&storage_key, &request.mime_type, UPLOAD_URL_TTL)
            .await?;

        tracing::info!(
            file_id = %file_id,
            storage_key = %storage_key,
            file_size = request.file_size,
            mime_type = %request.mime_type,
            "Upload URL issued"
        );

        Ok(UploadUrlResponse {
            upload_url,
            file_id,
            storage_key,
        })
    }

    /// Record a finished upload. The object itself is not checked.
    pub async fn complete_upload(
        &self,
        request: CompleteUploadRequest,
    ) -> Result<MediaFile, AppError> {
        let new_file = NewMediaFile {
            file_type: FileType::from_mime_type(&request.mime_type),
            filename: request.filename,
            original_filename: request.original_filename,
            file_size: request.file_size,
            mime_type: request.mime_type,
            storage_key: request.storage_key,
            width: positive(request.width),
            height: positive(request.height),
            duration: positive(request.duration),
        };

        let media_file = self.store.insert(new_file).await.map_err(|e| {
            tracing::error!(
                error = %e,
                file_id = %request.file_id,
                "Failed to record completed upload; uploaded object is left in storage"
            );
            e
        })?;

        tracing::info!(
            media_id = %media_file.id,
            file_id = %request.file_id,
            file_type = media_file.file_type.as_str(),
            "Upload completed"
        );

        Ok(media_file)
    }
}
