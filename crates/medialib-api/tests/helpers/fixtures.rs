//! Request bodies and upload shortcuts shared by the API tests.

use axum_test::TestServer;
use medialib_core::models::{MediaFile, UploadUrlResponse};
use serde_json::{json, Value};

pub fn upload_url_body(filename: &str, mime_type: &str) -> Value {
    json!({
        "filename": filename,
        "fileSize": 2048,
        "mimeType": mime_type,
    })
}

pub async fn request_upload_url(
    client: &TestServer,
    filename: &str,
    mime_type: &str,
) -> UploadUrlResponse {
    let response = client
        .post("/media/upload-url")
        .json(&upload_url_body(filename, mime_type))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json::<UploadUrlResponse>()
}

/// Run both upload phases for `filename` and return the recorded row.
pub async fn upload_media(
    client: &TestServer,
    filename: &str,
    mime_type: &str,
    extra: Value,
) -> MediaFile {
    let intent = request_upload_url(client, filename, mime_type).await;

    let mut body = json!({
        "fileId": intent.file_id.to_string(),
        "storageKey": intent.storage_key,
        "filename": filename,
        "originalFilename": filename,
        "fileSize": 2048,
        "mimeType": mime_type,
    });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }

    let response = client.post("/media/complete-upload").json(&body).await;
    assert_eq!(response.status_code(), 200);
    response.json::<MediaFile>()
}
