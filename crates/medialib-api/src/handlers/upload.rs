use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::MediaState;
use axum::{extract::State, response::IntoResponse, Json};
use medialib_core::models::{CompleteUploadRequest, MediaFile, UploadUrlRequest, UploadUrlResponse};

/// Issue a signed URL for a direct upload to the media bucket
#[utoipa::path(
    post,
    path = "/media/upload-url",
    tag = "media",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Upload URL issued", body = UploadUrlResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(media, request),
    fields(
        mime_type = %request.mime_type,
        file_size = request.file_size,
        operation = "create_upload_url"
    )
)]
pub async fn create_upload_url(
    State(media): State<MediaState>,
    ValidatedJson(request): ValidatedJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let response = media.uploads.create_upload_url(request).await?;
    Ok(Json(response))
}

/// Record a finished direct upload
#[utoipa::path(
    post,
    path = "/media/complete-upload",
    tag = "media",
    request_body = CompleteUploadRequest,
    responses(
        (status = 200, description = "Media file recorded", body = MediaFile),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(media, request),
    fields(
        storage_key = %request.storage_key,
        mime_type = %request.mime_type,
        operation = "complete_upload"
    )
)]
pub async fn complete_upload(
    State(media): State<MediaState>,
    ValidatedJson(request): ValidatedJson<CompleteUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let media_file = media.uploads.complete_upload(request).await?;
    Ok(Json(media_file))
}
