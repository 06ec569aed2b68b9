//! Media workflows, kept free of HTTP so they can be unit tested against in-memory doubles.

pub mod access_url;
pub mod catalog;
pub mod media_lifecycle;
pub mod thumbnail;
pub mod upload;

pub use access_url::AccessUrlService;
pub use catalog::CatalogService;
pub use media_lifecycle::MediaLifecycleService;
pub use thumbnail::ThumbnailService;
pub use upload::UploadCoordinator;

use medialib_core::models::{MediaFile, MediaFileId};
use medialib_core::AppError;
use medialib_db::MediaFileStore;

pub(crate) const MEDIA_NOT_FOUND: &str = "Media file not found";

/// Fetch a row or fail with NotFound.
pub(crate) async fn find_media_file(
    store: &dyn MediaFileStore,
    id: MediaFileId,
) -> Result<MediaFile, AppError> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(MEDIA_NOT_FOUND.to_string()))
}
