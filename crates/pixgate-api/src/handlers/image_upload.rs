use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use pixgate_core::constants::{FILENAME_HEADER, MAX_IMAGE_SIZE_BYTES, UPLOAD_SUCCESS_MESSAGE};
use pixgate_core::{ImageMetadata, UploadError, UploadRequest};

use crate::auth::extract_bearer_token;
use crate::error::{ApiEnvelope, ErrorResponse, HttpAppError};
use crate::state::AppState;

fn header_string(headers: &HeaderMap, name: impl axum::http::header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Payload and reported size for the pipeline.
///
/// A body refused by the size limit is not an error here: it becomes an empty
/// payload whose size is the declared `Content-Length` (or one byte over the
/// limit when none was sent), so the pipeline still checks the credential and
/// type first and then rejects it as too large.
fn payload_from_body(
    body: Result<Bytes, BytesRejection>,
    headers: &HeaderMap,
    max_size: usize,
) -> Result<(Vec<u8>, usize), UploadError> {
    match body {
        Ok(bytes) => {
            let size = bytes.len();
            Ok((bytes.to_vec(), size))
        }
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            let declared = header_string(headers, CONTENT_LENGTH)
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0);
            Ok((Vec::new(), declared.max(max_size + 1)))
        }
        Err(rejection) => Err(UploadError::Internal(format!(
            "Failed to read request body: {}",
            rejection.body_text()
        ))),
    }
}

/// Upload an image
///
/// The raw image bytes are the request body; `Content-Type` declares the image
/// type and `X-Filename` optionally carries the original filename.
#[utoipa::path(
    post,
    path = "/images",
    tag = "images",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "image/jpeg"),
    params(
        ("X-Filename" = Option<String>, Header, description = "Original filename")
    ),
    responses(
        (status = 201, description = "Image stored", body = ApiEnvelope<ImageMetadata>),
        (status = 400, description = "Unsupported type or spoofed signature", body = ErrorResponse),
        (status = 401, description = "Missing, expired or invalid token", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let (payload, size_bytes) = payload_from_body(body, &headers, MAX_IMAGE_SIZE_BYTES)?;

    let request = UploadRequest {
        credential: extract_bearer_token(&headers),
        declared_content_type: header_string(&headers, CONTENT_TYPE),
        payload,
        size_bytes,
        original_filename_hint: header_string(&headers, FILENAME_HEADER),
    };

    let outcome = state.upload_pipeline.process(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::new(UPLOAD_SUCCESS_MESSAGE, outcome.metadata)),
    ))
}
