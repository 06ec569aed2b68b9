use crate::error::{ErrorResponse, HttpAppError, ValidatedQuery};
use crate::state::MediaState;
use axum::{extract::State, response::IntoResponse, Json};
use medialib_core::models::{ListMediaQuery, MediaListResponse};

/// List media files, newest first
#[utoipa::path(
    get,
    path = "/media",
    tag = "media",
    params(ListMediaQuery),
    responses(
        (status = 200, description = "One page of media files", body = MediaListResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(media), fields(operation = "list_media"))]
pub async fn list_media(
    State(media): State<MediaState>,
    ValidatedQuery(query): ValidatedQuery<ListMediaQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let page = media.catalog.list(query).await?;
    tracing::debug!(returned = page.files.len(), total = page.total, "Media listed");
    Ok(Json(page))
}
