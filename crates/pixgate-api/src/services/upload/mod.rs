//! Image upload pipeline
//!
//! verify credential → validate content → derive key & store → respond

mod service;
mod types;

pub use service::UploadPipeline;
pub use types::{PipelineStage, PresignedUpload, UploadOutcome};
