use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use pixgate_core::constants::PRESIGNED_URL_MESSAGE;
use pixgate_core::UploadError;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::extract_bearer_token;
use crate::error::{ApiEnvelope, ErrorResponse, HttpAppError};
use crate::services::upload::PresignedUpload;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PresignedUrlQuery {
    /// Original filename; its extension decides the stored type
    pub filename: Option<String>,
    /// Optional content type; must agree with the extension
    pub content_type: Option<String>,
}

/// Generate a presigned URL for direct upload to the bucket
#[utoipa::path(
    get,
    path = "/images/presigned-url",
    tag = "images",
    params(PresignedUrlQuery),
    responses(
        (status = 201, description = "Presigned URL generated", body = ApiEnvelope<PresignedUpload>),
        (status = 400, description = "Missing filename or unsupported type", body = ErrorResponse),
        (status = 401, description = "Missing, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn generate_presigned_url(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<PresignedUrlQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let credential = extract_bearer_token(&headers);
    let Query(query) =
        query.map_err(|rejection| UploadError::InvalidInput(rejection.body_text()))?;

    let presigned = state
        .upload_pipeline
        .prepare_direct_upload(
            credential.as_deref(),
            query.filename.as_deref(),
            query.content_type.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::new(PRESIGNED_URL_MESSAGE, presigned)),
    ))
}
