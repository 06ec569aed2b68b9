//! OpenAPI documentation, served at `/api/openapi.json` and browsable at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use medialib_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "medialib API",
        version = "0.1.0",
        description = "Staff media library: direct uploads to object storage, catalogue search, and signed preview and download URLs for images and videos."
    ),
    paths(
        handlers::upload::create_upload_url,
        handlers::upload::complete_upload,
        handlers::list::list_media,
        handlers::access::download_url,
        handlers::access::preview_url,
        handlers::thumbnail::generate_thumbnail,
        handlers::delete::delete_media,
    ),
    components(
        schemas(
            models::MediaFile,
            models::FileType,
            models::MediaListResponse,
            models::UploadUrlRequest,
            models::UploadUrlResponse,
            models::CompleteUploadRequest,
            models::DownloadUrlResponse,
            models::PreviewUrlResponse,
            models::ThumbnailResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "media", description = "Upload, catalogue, access and delete media files")
    )
)]
pub struct ApiDoc;
