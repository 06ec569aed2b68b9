use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::media_file::{FileType, MediaFile};
use crate::constants::DEFAULT_LIST_LIMIT;

/// Raw list query parameters as they arrive on the URL
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMediaQuery {
    /// Page size (default 50)
    pub limit: Option<i64>,
    /// Rows to skip (default 0)
    pub offset: Option<i64>,
    /// `image` or `video`; any other value is ignored
    pub file_type: Option<String>,
    /// Case-insensitive substring of filename or original filename
    pub search: Option<String>,
}

/// Normalised list filter handed to the metadata store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFileFilter {
    pub file_type: Option<FileType>,
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for MediaFileFilter {
    fn default() -> Self {
        Self {
            file_type: None,
            search: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl From<ListMediaQuery> for MediaFileFilter {
    fn from(query: ListMediaQuery) -> Self {
        Self {
            file_type: query.file_type.as_deref().and_then(FileType::from_filter),
            search: query.search.filter(|s| !s.is_empty()),
            limit: query
                .limit
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_LIST_LIMIT),
            offset: query.offset.unwrap_or(0).max(0),
        }
    }
}

impl MediaFileFilter {
    /// Whether rows exist past the current page.
    pub fn has_more(&self, total: i64) -> bool {
        self.offset.saturating_add(self.limit) < total
    }
}

/// One page of the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaListResponse {
    pub files: Vec<MediaFile>,
    /// Rows matching the filters, ignoring pagination
    pub total: i64,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults() {
        let filter = MediaFileFilter::from(ListMediaQuery::default());
        assert_eq!(filter, MediaFileFilter::default());
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);
    }

    #[test]
    fn test_filter_ignores_unknown_file_type_and_empty_search() {
        let filter = MediaFileFilter::from(ListMediaQuery {
            file_type: Some("document".to_string()),
            search: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(filter.file_type, None);
        assert_eq!(filter.search, None);

        let filter = MediaFileFilter::from(ListMediaQuery {
            file_type: Some("video".to_string()),
            search: Some("Cat".to_string()),
            ..Default::default()
        });
        assert_eq!(filter.file_type, Some(FileType::Video));
        assert_eq!(filter.search.as_deref(), Some("Cat"));
    }

    #[test]
    fn test_filter_clamps_pagination() {
        let filter = MediaFileFilter::from(ListMediaQuery {
            limit: Some(0),
            offset: Some(-5),
            ..Default::default()
        });
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);

        let filter = MediaFileFilter::from(ListMediaQuery {
            limit: Some(-1),
            offset: Some(20),
            ..Default::default()
        });
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 20);
    }

    #[test]
    fn test_has_more_is_offset_plus_limit_below_total() {
        for total in 0..12 {
            for offset in 0..12 {
                for limit in 1..6 {
                    let filter = MediaFileFilter {
                        limit,
                        offset,
                        ..Default::default()
                    };
                    assert_eq!(filter.has_more(total), offset + limit < total);
                }
            }
        }
    }
}
