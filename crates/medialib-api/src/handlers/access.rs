use super::parse_media_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::MediaState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use medialib_core::models::{DownloadUrlResponse, PreviewUrlResponse};

/// Signed download URL for the original file
#[utoipa::path(
    get,
    path = "/media/{id}/download",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media file ID")
    ),
    responses(
        (status = 200, description = "Download URL issued", body = DownloadUrlResponse),
        (status = 404, description = "Media file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(media), fields(media_id = %id, operation = "download_url"))]
pub async fn download_url(
    State(media): State<MediaState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_media_id(&id)?;
    let response = media.access.download_url(id).await?;
    Ok(Json(response))
}

/// Signed preview URL; videos with a thumbnail preview through the thumbnail
#[utoipa::path(
    get,
    path = "/media/{id}/preview",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media file ID")
    ),
    responses(
        (status = 200, description = "Preview URL issued", body = PreviewUrlResponse),
        (status = 404, description = "Media file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(media), fields(media_id = %id, operation = "preview_url"))]
pub async fn preview_url(
    State(media): State<MediaState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_media_id(&id)?;
    let response = media.access.preview_url(id).await?;
    Ok(Json(response))
}
