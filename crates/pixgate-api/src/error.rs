//! HTTP response envelopes and error conversion
//!
//! Every response body has the same outer shape:
//! `{"message": ..., "data": ..., "timestamp": ...}`. Failures put the stable
//! error code in `message` and the client-facing text in `data.details`.
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>` and use `?` on
//! anything that converts into `UploadError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use pixgate_core::{ErrorMetadata, LogLevel, UploadError};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiEnvelope<T> {
    pub message: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiEnvelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetails {
    pub details: String,
}

/// Failure envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable error code, e.g. "AUTH-003"
    pub message: String,
    pub data: ErrorDetails,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn from_error(error: &UploadError) -> Self {
        Self {
            message: error.error_code().to_string(),
            data: ErrorDetails {
                details: error.client_message().to_string(),
            },
            timestamp: Utc::now(),
        }
    }
}

/// Wrapper type for UploadError to implement IntoResponse
/// (orphan rule: both the trait and UploadError are foreign here)
#[derive(Debug)]
pub struct HttpAppError(pub UploadError);

impl From<UploadError> for HttpAppError {
    fn from(err: UploadError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(UploadError::from(err))
    }
}

fn log_error(error: &UploadError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let error = &self.0;

        let status = StatusCode::from_u16(error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(error);

        (status, Json(ErrorResponse::from_error(error))).into_response()
    }
}
