//! In-memory `MediaFileStore` for unit and handler tests.

use crate::db::MediaFileStore;
use chrono::Utc;
use medialib_core::models::{MediaFile, MediaFileFilter, MediaFileId, NewMediaFile};
use medialib_core::AppError;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    rows: Vec<MediaFile>,
    next_id: i64,
    fail_inserts: bool,
}

/// Mirrors the PostgreSQL repository's filtering, ordering, unique storage keys and CHECK
/// constraints.
#[derive(Clone, Default)]
pub struct MemoryMediaFileStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryMediaFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following insert fail with a database-style error.
    pub fn fail_inserts(&self, fail: bool) {
        self.inner.lock().unwrap().fail_inserts = fail;
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a fully-formed row, keeping its timestamps. Useful for ordering tests.
    pub fn push(&self, file: MediaFile) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id = inner.next_id.max(file.id.0);
        inner.rows.push(file);
    }
}

/// Same rules as the CHECK constraints on `media_files`.
fn check_constraints(file: &NewMediaFile) -> Result<(), AppError> {
    let violated = if file.file_size <= 0 {
        Some("file_size")
    } else if file.width.is_some_and(|w| w <= 0) {
        Some("width")
    } else if file.height.is_some_and(|h| h <= 0) {
        Some("height")
    } else if file.duration.is_some_and(|d| d <= 0.0) {
        Some("duration")
    } else {
        None
    };

    match violated {
        Some(column) => Err(AppError::Internal(format!(
            "check constraint violated on media_files.{}",
            column
        ))),
        None => Ok(()),
    }
}

fn matches(file: &MediaFile, filter: &MediaFileFilter) -> bool {
    if filter.file_type.is_some_and(|t| t != file.file_type) {
        return false;
    }
    match filter.search.as_deref() {
        Some(term) => {
            let term = term.to_lowercase();
            file.filename.to_lowercase().contains(&term)
                || file.original_filename.to_lowercase().contains(&term)
        }
        None => true,
    }
}

#[async_trait::async_trait]
impl MediaFileStore for MemoryMediaFileStore {
    async fn insert(&self, file: NewMediaFile) -> Result<MediaFile, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_inserts {
            return Err(AppError::Internal("insert failed".to_string()));
        }
        if inner.rows.iter().any(|r| r.storage_key == file.storage_key) {
            return Err(AppError::Internal(format!(
                "duplicate storage_key {}",
                file.storage_key
            )));
        }
        check_constraints(&file)?;

        inner.next_id += 1;
        let now = Utc::now();
        let row = MediaFile {
            id: MediaFileId(inner.next_id),
            filename: file.filename,
            original_filename: file.original_filename,
            file_size: file.file_size,
            mime_type: file.mime_type,
            file_type: file.file_type,
            storage_key: file.storage_key,
            thumbnail_key: None,
            width: file.width,
            height: file.height,
            duration: file.duration,
            uploaded_at: now,
            created_at: now,
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: MediaFileId) -> Result<Option<MediaFile>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self, filter: &MediaFileFilter) -> Result<(Vec<MediaFile>, i64), AppError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<MediaFile> = inner
            .rows
            .iter()
            .filter(|r| matches(r, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.uploaded_at
                .cmp(&a.uploaded_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = rows.len() as i64;
        let page = rows
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn set_thumbnail_key(
        &self,
        id: MediaFileId,
        thumbnail_key: &str,
    ) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.thumbnail_key = Some(thumbnail_key.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: MediaFileId) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|r| r.id != id);
        Ok(inner.rows.len() < before)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialib_core::models::FileType;

    fn new_file(storage_key: &str) -> NewMediaFile {
        NewMediaFile {
            filename: storage_key.to_string(),
            original_filename: storage_key.to_string(),
            file_size: 1024,
            mime_type: "video/mp4".to_string(),
            file_type: FileType::Video,
            storage_key: storage_key.to_string(),
            width: Some(640),
            height: Some(480),
            duration: Some(3.5),
        }
    }

    #[tokio::test]
    async fn test_insert_enforces_positive_columns() {
        let store = MemoryMediaFileStore::new();

        let rejected = [
            NewMediaFile {
                file_size: 0,
                ..new_file("a.mp4")
            },
            NewMediaFile {
                width: Some(0),
                ..new_file("b.mp4")
            },
            NewMediaFile {
                height: Some(-2),
                ..new_file("c.mp4")
            },
            NewMediaFile {
                duration: Some(0.0),
                ..new_file("d.mp4")
            },
        ];
        for file in rejected {
            let err = store.insert(file).await.unwrap_err();
            assert!(matches!(err, AppError::Internal(_)));
        }
        assert!(store.is_empty());

        let row = store
            .insert(NewMediaFile {
                width: None,
                height: None,
                duration: None,
                ..new_file("e.mp4")
            })
            .await
            .unwrap();
        assert_eq!(row.id, MediaFileId(1));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_storage_key() {
        let store = MemoryMediaFileStore::new();
        store.insert(new_file("a.mp4")).await.unwrap();

        assert!(store.insert(new_file("a.mp4")).await.is_err());
        assert_eq!(store.len(), 1);
    }
}
