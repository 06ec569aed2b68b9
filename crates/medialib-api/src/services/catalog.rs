use medialib_core::models::{ListMediaQuery, MediaFileFilter, MediaListResponse};
use medialib_core::AppError;
use medialib_db::MediaFileStore;
use std::sync::Arc;

/// Filtered, paginated listing of the catalogue
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn MediaFileStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn MediaFileStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: ListMediaQuery) -> Result<MediaListResponse, AppError> {
        let filter = MediaFileFilter::from(query);
        let (files, total) = self.store.list(&filter).await?;

        Ok(MediaListResponse {
            has_more: filter.has_more(total),
            files,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::new_media_file;
    use medialib_db::test_helpers::MemoryMediaFileStore;

    async fn seeded() -> (CatalogService, MemoryMediaFileStore) {
        let store = MemoryMediaFileStore::new();
        for (key, mime) in [
            ("beach.jpg", "image/jpeg"),
            ("launch.mp4", "video/mp4"),
            ("cat_100%.png", "image/png"),
            ("interview.webm", "video/webm"),
            ("Catalogue.pdf", "application/pdf"),
        ] {
            store.insert(new_media_file(key, mime)).await.unwrap();
        }
        (CatalogService::new(Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_list_newest_first_with_defaults() {
        let (catalog, _) = seeded().await;

        let page = catalog.list(ListMediaQuery::default()).await.unwrap();
        assert_eq!(page.total, 5);
        assert!(!page.has_more);
        assert_eq!(page.files[0].storage_key, "Catalogue.pdf");
        assert_eq!(page.files[4].storage_key, "beach.jpg");
    }

    #[tokio::test]
    async fn test_list_pagination_has_more() {
        let (catalog, _) = seeded().await;

        let page = catalog
            .list(ListMediaQuery {
                limit: Some(2),
                offset: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.files.len(), 2);
        assert_eq!(page.total, 5);
        assert!(page.has_more);

        let last = catalog
            .list(ListMediaQuery {
                limit: Some(2),
                offset: Some(4),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(last.files.len(), 1);
        assert!(!last.has_more);
    }

    #[tokio::test]
    async fn test_list_file_type_and_search() {
        let (catalog, _) = seeded().await;

        let videos = catalog
            .list(ListMediaQuery {
                file_type: Some("video".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        // application/pdf is filed as video
        assert_eq!(videos.total, 3);

        let cats = catalog
            .list(ListMediaQuery {
                search: Some("CAT".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(cats.total, 2);

        let ignored = catalog
            .list(ListMediaQuery {
                file_type: Some("audio".to_string()),
                search: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(ignored.total, 5);
    }
}
