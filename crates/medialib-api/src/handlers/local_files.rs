//! Serves the signed URLs issued by the local filesystem backend.
//!
//! Mounted only when `STORAGE_BACKEND=local`. Each request must carry the `expires` and
//! `signature` query parameters minted for its method, bucket and key. Uploads larger than
//! `LOCAL_MAX_UPLOAD_MB` are answered with 413, whether or not they declare a Content-Length.

use crate::error::{HttpAppError, ValidatedQuery};
use crate::state::FileState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use futures::{future, TryStreamExt};
use medialib_core::{AppError, Bucket};
use medialib_storage::LocalStorage;
use serde::Deserialize;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::io::StreamReader;

#[derive(Debug, Deserialize)]
pub struct SignedUrlParams {
    pub expires: Option<u64>,
    pub signature: Option<String>,
}

fn authorize<'a>(
    files: &'a FileState,
    method: &Method,
    bucket: &str,
    key: &str,
    params: &SignedUrlParams,
) -> Result<&'a LocalStorage, HttpAppError> {
    let bucket: Bucket = bucket
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown bucket: {}", bucket)))?;
    let local = files
        .local
        .as_ref()
        .ok_or_else(|| AppError::NotFound("Local file serving is disabled".to_string()))?;

    let (Some(expires), Some(signature)) = (params.expires, params.signature.as_deref()) else {
        return Err(AppError::Forbidden("Missing URL signature".to_string()).into());
    };

    let storage = local.bucket(bucket);
    storage.verify(method, key, expires, signature)?;
    Ok(storage)
}

fn payload_too_large(limit: u64) -> HttpAppError {
    AppError::PayloadTooLarge(format!("Upload exceeds the {} byte limit", limit)).into()
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Stream a stored object back to the client
#[tracing::instrument(skip(files, params), fields(operation = "get_local_file"))]
pub async fn get_local_file(
    State(files): State<FileState>,
    Path((bucket, key)): Path<(String, String)>,
    ValidatedQuery(params): ValidatedQuery<SignedUrlParams>,
) -> Result<Response, HttpAppError> {
    let storage = authorize(&files, &Method::GET, &bucket, &key, &params)?;
    let stream = storage.read_stream(&key).await?;

    let content_type = mime_guess::from_path(&key).first_or_octet_stream();
    Ok((
        [(header::CONTENT_TYPE, content_type.essence_str().to_string())],
        Body::from_stream(stream),
    )
        .into_response())
}

/// Accept a direct upload to a signed PUT URL
#[tracing::instrument(
    skip(files, params, headers, body),
    fields(operation = "put_local_file")
)]
pub async fn put_local_file(
    State(files): State<FileState>,
    Path((bucket, key)): Path<(String, String)>,
    ValidatedQuery(params): ValidatedQuery<SignedUrlParams>,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, HttpAppError> {
    let storage = authorize(&files, &Method::PUT, &bucket, &key, &params)?;
    let limit = files.max_upload_bytes;

    if declared_length(&headers).is_some_and(|len| len > limit) {
        return Err(payload_too_large(limit));
    }

    // Chunked bodies are counted as they arrive.
    let exceeded = Arc::new(AtomicBool::new(false));
    let mut received: u64 = 0;
    let over_limit = exceeded.clone();
    let chunks = body
        .into_data_stream()
        .map_err(io::Error::other)
        .and_then(move |chunk| {
            received = received.saturating_add(chunk.len() as u64);
            if received > limit {
                over_limit.store(true, Ordering::Relaxed);
                return future::ready(Err(io::Error::other("upload exceeds size limit")));
            }
            future::ready(Ok(chunk))
        });

    match storage.write_stream(&key, Box::pin(StreamReader::new(chunks))).await {
        Ok(_) => Ok(StatusCode::OK),
        Err(_) if exceeded.load(Ordering::Relaxed) => {
            tracing::debug!(limit, "Local upload rejected: body too large");
            Err(payload_too_large(limit))
        }
        Err(e) => Err(e.into()),
    }
}
