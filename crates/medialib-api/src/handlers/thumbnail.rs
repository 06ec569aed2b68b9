use super::parse_media_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::MediaState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use medialib_core::models::ThumbnailResponse;

/// Record the thumbnail key for a video
#[utoipa::path(
    post,
    path = "/media/{id}/thumbnail",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media file ID of a video")
    ),
    responses(
        (status = 200, description = "Thumbnail key recorded", body = ThumbnailResponse),
        (status = 404, description = "Video file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(media), fields(media_id = %id, operation = "generate_thumbnail"))]
pub async fn generate_thumbnail(
    State(media): State<MediaState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_media_id(&id)?;
    let response = media.thumbnails.generate(id).await?;
    Ok(Json(response))
}
