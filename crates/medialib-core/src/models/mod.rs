//! Data models
//!
//! The `MediaFile` record and the request/response types exchanged over HTTP.

mod access;
mod catalog;
mod media_file;
mod upload;

pub use access::{DownloadUrlResponse, PreviewUrlResponse, ThumbnailResponse};
pub use catalog::{ListMediaQuery, MediaFileFilter, MediaListResponse};
pub use media_file::{FileType, MediaFile, MediaFileId, NewMediaFile};
pub use upload::{CompleteUploadRequest, UploadUrlRequest, UploadUrlResponse};
