use super::parse_media_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::MediaState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/media/{id}",
    tag = "media",
    params(
        ("id" = String, Path, description = "Media file ID")
    ),
    responses(
        (status = 204, description = "Media file deleted"),
        (status = 404, description = "Media file not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(media), fields(media_id = %id, operation = "delete_media"))]
pub async fn delete_media(
    State(media): State<MediaState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_media_id(&id)?;
    media.lifecycle.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
