use chrono::{DateTime, Utc};
use pixgate_core::{ImageMetadata, Role};
use serde::Serialize;
use utoipa::ToSchema;

/// Position of a request in the upload pipeline.
///
/// Stages only move forward; the first failure jumps to `Failed` and nothing
/// after it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    CredentialVerified,
    ContentValidated,
    Uploaded,
    Responded,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Start => "start",
            PipelineStage::CredentialVerified => "credential_verified",
            PipelineStage::ContentValidated => "content_validated",
            PipelineStage::Uploaded => "uploaded",
            PipelineStage::Responded => "responded",
            PipelineStage::Failed => "failed",
        }
    }
}

/// Result of a completed upload
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub object_key: String,
    pub role: Role,
    pub metadata: ImageMetadata,
}

/// Presigned PUT target for a direct upload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    pub upload_url: String,
    pub object_key: String,
    /// Public URL the object will have once the client has uploaded it
    pub image_url: String,
    pub expires_at: DateTime<Utc>,
}
