use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signed download link plus what the browser needs for save-as
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlResponse {
    pub download_url: String,
    /// Original (user-facing) filename
    pub filename: String,
    pub mime_type: String,
    pub file_size: i64,
}

/// Signed preview link plus rendering hints
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewUrlResponse {
    pub preview_url: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Result of recording a thumbnail key
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    pub thumbnail_key: String,
    pub success: bool,
}
