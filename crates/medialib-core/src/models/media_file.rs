use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Server-assigned identifier of a media file row.
///
/// Stored as a `BIGSERIAL` and exchanged as a decimal string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct MediaFileId(pub i64);

impl MediaFileId {
    /// Parse an id taken from a URL path. Anything that is not an integer yields `None`,
    /// which callers treat the same as an id with no row behind it.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(MediaFileId)
    }
}

impl Display for MediaFileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MediaFileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MediaFileId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(MediaFileId(n)),
            Repr::Text(s) => s
                .parse::<i64>()
                .map(MediaFileId)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Coarse media classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "media_file_type", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
}

impl FileType {
    /// `image/*` is an image; every other MIME type is filed as video.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            FileType::Image
        } else {
            FileType::Video
        }
    }

    /// Parse a list filter value. Only the exact names are accepted.
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "image" => Some(FileType::Image),
            "video" => Some(FileType::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
        }
    }
}

/// A catalogued upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    #[schema(value_type = String, example = "42")]
    pub id: MediaFileId,
    /// Storage-facing name
    pub filename: String,
    /// Name shown to users and used for save-as
    pub original_filename: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_type: FileType,
    pub storage_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields written when an upload is completed; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMediaFile {
    pub filename: String,
    pub original_filename: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_type: FileType,
    pub storage_key: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(thumbnail_key: Option<&str>) -> MediaFile {
        let now = Utc::now();
        MediaFile {
            id: MediaFileId(7),
            filename: "cat.png".to_string(),
            original_filename: "Cat Picture.png".to_string(),
            file_size: 1024,
            mime_type: "image/png".to_string(),
            file_type: FileType::Image,
            storage_key: "0b8f3c1e-2d4a-4c6b-9e1f-3a5b7c9d1e2f.png".to_string(),
            thumbnail_key: thumbnail_key.map(String::from),
            width: Some(800),
            height: Some(600),
            duration: None,
            uploaded_at: now,
            created_at: now,
        }
    }

    #[test]
    fn test_file_type_from_mime_type() {
        assert_eq!(FileType::from_mime_type("image/png"), FileType::Image);
        assert_eq!(FileType::from_mime_type("image/svg+xml"), FileType::Image);
        assert_eq!(FileType::from_mime_type("video/mp4"), FileType::Video);
        assert_eq!(FileType::from_mime_type("application/pdf"), FileType::Video);
        assert_eq!(FileType::from_mime_type(""), FileType::Video);
        // Prefix match is exact: no case folding, no bare "image"
        assert_eq!(FileType::from_mime_type("IMAGE/PNG"), FileType::Video);
        assert_eq!(FileType::from_mime_type("image"), FileType::Video);
    }

    #[test]
    fn test_file_type_filter_accepts_exact_names_only() {
        assert_eq!(FileType::from_filter("image"), Some(FileType::Image));
        assert_eq!(FileType::from_filter("video"), Some(FileType::Video));
        assert_eq!(FileType::from_filter("all"), None);
        assert_eq!(FileType::from_filter("Image"), None);
        assert_eq!(FileType::from_filter(""), None);
    }

    #[test]
    fn test_media_file_id_parse() {
        assert_eq!(MediaFileId::parse("42"), Some(MediaFileId(42)));
        assert_eq!(MediaFileId::parse(" 42 "), Some(MediaFileId(42)));
        assert_eq!(MediaFileId::parse("abc"), None);
        assert_eq!(MediaFileId::parse("12abc"), None);
        assert_eq!(MediaFileId::parse(""), None);
    }

    #[test]
    fn test_media_file_serializes_camel_case_with_string_id() {
        let json = serde_json::to_value(sample(None)).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["originalFilename"], "Cat Picture.png");
        assert_eq!(json["fileSize"], 1024);
        assert_eq!(json["fileType"], "image");
        assert_eq!(json["width"], 800);
        assert!(json.get("thumbnailKey").is_none());
        assert!(json.get("duration").is_none());
        assert!(json.get("uploadedAt").is_some());
    }

    #[test]
    fn test_media_file_deserializes_its_own_output() {
        let file = sample(Some("thumb_clip.jpg"));
        let json = serde_json::to_string(&file).unwrap();
        let parsed: MediaFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }
}
