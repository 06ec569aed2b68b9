//! Shared constants

use std::time::Duration;

/// Lifetime of the signed PUT URL handed out by the upload-intent step.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Lifetime of signed GET URLs for download and preview.
pub const ACCESS_URL_TTL: Duration = Duration::from_secs(60 * 60);

/// Page size used when the caller does not supply a usable limit.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

pub const THUMBNAIL_KEY_PREFIX: &str = "thumb_";
pub const THUMBNAIL_EXTENSION: &str = "jpg";
