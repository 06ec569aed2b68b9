pub mod access;
pub mod delete;
pub mod health;
pub mod list;
pub mod local_files;
pub mod thumbnail;
pub mod upload;

use medialib_core::models::MediaFileId;
use medialib_core::AppError;

/// Path ids that are not integers resolve like ids with no row behind them.
pub(crate) fn parse_media_id(raw: &str) -> Result<MediaFileId, AppError> {
    MediaFileId::parse(raw).ok_or_else(|| AppError::NotFound("Media file not found".to_string()))
}
