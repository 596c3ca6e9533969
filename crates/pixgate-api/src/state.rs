//! Application state shared by all handlers.

use std::sync::Arc;

use pixgate_processing::ContentValidator;
use pixgate_services::{SecretCache, SecretProvider};
use pixgate_storage::Storage;

use crate::auth::CredentialVerifier;
use crate::services::upload::UploadPipeline;

pub struct AppState {
    pub upload_pipeline: UploadPipeline,
}

impl AppState {
    /// Wire the pipeline from its collaborators.
    pub fn new(storage: Arc<dyn Storage>, secret_provider: Arc<dyn SecretProvider>) -> Self {
        let secrets = Arc::new(SecretCache::new(secret_provider));
        let verifier = Arc::new(CredentialVerifier::new(secrets));
        let upload_pipeline = UploadPipeline::new(verifier, ContentValidator::default(), storage);

        Self { upload_pipeline }
    }
}
