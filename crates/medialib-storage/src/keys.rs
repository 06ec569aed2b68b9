//! Shared key generation for storage backends.
//!
//! Primary objects are stored as `{file_id}.{ext}` in the media bucket. Thumbnails are stored
//! as `thumb_{stem}.jpg` in the thumbnail bucket, where `stem` is the primary key without its
//! final extension.

use medialib_core::constants::{THUMBNAIL_EXTENSION, THUMBNAIL_KEY_PREFIX};
use uuid::Uuid;

/// Generate the primary storage key for a fresh upload.
pub fn media_storage_key(file_id: Uuid, filename: &str) -> String {
    format!("{}.{}", file_id, file_extension(filename))
}

/// Derive the thumbnail key recorded for a primary storage key.
///
/// Deterministic: the same storage key always maps to the same thumbnail key.
pub fn thumbnail_key(storage_key: &str) -> String {
    format!(
        "{}{}.{}",
        THUMBNAIL_KEY_PREFIX,
        strip_extension(storage_key),
        THUMBNAIL_EXTENSION
    )
}

/// Text after the last `.` as written, or the whole filename when it has no `.`.
///
/// Path separators are dropped so the extension never adds a directory level to the key.
fn file_extension(filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map_or(filename, |(_, ext)| ext);

    extension
        .chars()
        .filter(|c| !matches!(c, '/' | '\\'))
        .collect()
}

/// Remove a trailing `.ext` where `ext` is non-empty and holds no `/` or `.`.
fn strip_extension(key: &str) -> &str {
    match key.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
        _ => key,
    }
}
