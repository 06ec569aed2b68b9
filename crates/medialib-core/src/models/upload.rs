use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request for a direct-upload URL
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Name of the file being uploaded; its extension becomes part of the storage key
    pub filename: String,
    /// Declared size in bytes (not checked against the uploaded bytes)
    pub file_size: i64,
    pub mime_type: String,
}

/// Upload intent: where to PUT the bytes and what to send back on completion
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    /// Signed PUT URL, valid for two hours
    pub upload_url: String,
    pub file_id: Uuid,
    pub storage_key: String,
}

/// Metadata reported by the client once the direct upload has finished
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub file_id: String,
    pub storage_key: String,
    pub filename: String,
    pub original_filename: String,
    pub file_size: i64,
    pub mime_type: String,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    /// Seconds
    #[serde(default)]
    pub duration: Option<f64>,
}
