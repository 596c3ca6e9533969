use std::sync::Arc;

use chrono::{DateTime, Utc};
use pixgate_core::constants::PRESIGNED_URL_TTL;
use pixgate_core::{ImageMetadata, UploadError, UploadRequest, UploadResult};
use pixgate_processing::{validate_image_filename, ContentValidator};
use pixgate_storage::{generate_image_key, Storage};

use super::types::{PipelineStage, PresignedUpload, UploadOutcome};
use crate::auth::CredentialVerifier;

/// Runs one upload request through every stage in order
pub struct UploadPipeline {
    verifier: Arc<CredentialVerifier>,
    validator: ContentValidator,
    storage: Arc<dyn Storage>,
}

impl UploadPipeline {
    pub fn new(
        verifier: Arc<CredentialVerifier>,
        validator: ContentValidator,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            verifier,
            validator,
            storage,
        }
    }

    /// Verify, validate and store one image.
    ///
    /// Nothing is written unless every earlier stage succeeded.
    #[tracing::instrument(
        skip(self, request),
        fields(
            size_bytes = request.size_bytes,
            declared_type = ?request.declared_content_type,
            operation = "upload_image"
        )
    )]
    pub async fn process(&self, request: UploadRequest) -> UploadResult<UploadOutcome> {
        let mut stage = PipelineStage::Start;

        match self.run(&mut stage, request).await {
            Ok(outcome) => {
                tracing::info!(
                    object_key = %outcome.object_key,
                    role = %outcome.role,
                    stage = PipelineStage::Responded.as_str(),
                    "Image upload completed"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::debug!(
                    failed_after = stage.as_str(),
                    stage = PipelineStage::Failed.as_str(),
                    error_type = e.error_type(),
                    "Upload pipeline stopped"
                );
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        stage: &mut PipelineStage,
        request: UploadRequest,
    ) -> UploadResult<UploadOutcome> {
        let identity = self.verifier.verify(request.credential.as_deref()).await?;
        *stage = PipelineStage::CredentialVerified;

        if identity.role.is_guest() {
            tracing::info!(subject_id = %identity.subject_id, "Guest token upload (pre-registration)");
        } else {
            tracing::info!(
                subject_id = %identity.subject_id,
                role = %identity.role,
                "Authenticated upload"
            );
        }

        let content_type = request.declared_content_type.as_deref().unwrap_or_default();
        self.validator
            .validate(content_type, request.size_bytes, &request.payload)?;
        *stage = PipelineStage::ContentValidated;

        let uploaded_at = Utc::now();
        let (object_key, image_url) = self
            .upload(&identity.subject_id, request.payload, content_type, uploaded_at)
            .await?;
        *stage = PipelineStage::Uploaded;

        let metadata = ImageMetadata::new(
            image_url,
            request.size_bytes as u64,
            request.original_filename_hint.as_deref(),
            uploaded_at,
        );

        Ok(UploadOutcome {
            object_key,
            role: identity.role,
            metadata,
        })
    }

    /// Derive the object key and store the bytes. Returns `(key, public_url)`.
    pub async fn upload(
        &self,
        subject_id: &str,
        payload: Vec<u8>,
        content_type: &str,
        now: DateTime<Utc>,
    ) -> UploadResult<(String, String)> {
        let object_key = generate_image_key(subject_id, content_type, now)?;
        let image_url = self
            .storage
            .put_object(&object_key, payload, content_type)
            .await?;
        Ok((object_key, image_url))
    }

    /// Issue a presigned PUT URL so the client can upload directly to the bucket.
    ///
    /// The bytes never pass through here, so only the filename and declared
    /// type can be checked.
    #[tracing::instrument(skip(self, credential), fields(operation = "generate_presigned_url"))]
    pub async fn prepare_direct_upload(
        &self,
        credential: Option<&str>,
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> UploadResult<PresignedUpload> {
        let identity = self.verifier.verify(credential).await?;

        let filename = filename.ok_or_else(|| {
            UploadError::InvalidInput("filename query parameter is required".to_string())
        })?;
        let content_type = validate_image_filename(filename, content_type)?;

        let now = Utc::now();
        let object_key = generate_image_key(&identity.subject_id, content_type, now)?;
        let upload_url = self
            .storage
            .presigned_put_url(&object_key, content_type, PRESIGNED_URL_TTL)
            .await?;
        let expires_at = now
            + chrono::Duration::from_std(PRESIGNED_URL_TTL)
                .map_err(|e| UploadError::Internal(e.to_string()))?;

        tracing::info!(
            subject_id = %identity.subject_id,
            object_key = %object_key,
            filename = %filename,
            "Generated presigned URL for direct upload"
        );

        Ok(PresignedUpload {
            upload_url,
            image_url: self.storage.public_url(&object_key),
            object_key,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use pixgate_services::{EnvSecretProvider, SecretCache};
    use pixgate_storage::{StorageBackend, StorageError, StorageResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const SECRET: &str = "pipeline-secret";
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    #[derive(Default)]
    struct RecordingStorage {
        puts: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Storage for RecordingStorage {
        async fn put_object(
            &self,
            storage_key: &str,
            _data: Vec<u8>,
            _content_type: &str,
        ) -> StorageResult<String> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StorageError::UploadFailed("bucket unavailable".to_string()));
            }
            Ok(self.public_url(storage_key))
        }

        fn public_url(&self, storage_key: &str) -> String {
            format!("https://bucket.s3.ap-northeast-2.amazonaws.com/{}", storage_key)
        }

        async fn presigned_put_url(
            &self,
            storage_key: &str,
            _content_type: &str,
            _expires_in: Duration,
        ) -> StorageResult<String> {
            Ok(format!("{}?X-Amz-Signature=test", self.public_url(storage_key)))
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::S3
        }
    }

    fn pipeline(storage: Arc<RecordingStorage>) -> UploadPipeline {
        let secrets = SecretCache::new(Arc::new(EnvSecretProvider::new(SECRET.to_string())));
        let verifier = CredentialVerifier::new(Arc::new(secrets));
        UploadPipeline::new(Arc::new(verifier), ContentValidator::default(), storage)
    }

    fn token(sub: &str) -> String {
        encode(
            &Header::default(),
            &serde_json::json!({"sub": sub, "exp": Utc::now().timestamp() + 600}),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn request(credential: Option<String>, content_type: &str, payload: &[u8]) -> UploadRequest {
        UploadRequest {
            credential,
            declared_content_type: Some(content_type.to_string()),
            payload: payload.to_vec(),
            size_bytes: payload.len(),
            original_filename_hint: None,
        }
    }

    #[tokio::test]
    async fn test_successful_upload() {
        let storage = Arc::new(RecordingStorage::default());
        let outcome = pipeline(storage.clone())
            .process(request(Some(token("42")), "image/jpeg", JPEG))
            .await
            .unwrap();

        assert!(outcome.object_key.starts_with("users/42/images/"));
        assert!(outcome.metadata.image_url.ends_with(".jpeg"));
        assert_eq!(outcome.metadata.file_size, JPEG.len() as u64);
        assert!(outcome.metadata.original_filename.starts_with("image-"));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_never_reaches_storage() {
        let storage = Arc::new(RecordingStorage::default());
        let result = pipeline(storage.clone())
            .process(request(None, "image/jpeg", JPEG))
            .await;

        assert!(matches!(result, Err(UploadError::CredentialMissing)));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_storage() {
        let storage = Arc::new(RecordingStorage::default());
        let result = pipeline(storage.clone())
            .process(request(Some(token("42")), "image/png", JPEG))
            .await;

        assert!(matches!(result, Err(UploadError::SignatureMismatch { .. })));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let storage = Arc::new(RecordingStorage::default());
        let mut req = request(Some(token("42")), "image/jpeg", JPEG);
        req.declared_content_type = None;

        let result = pipeline(storage).process(req).await;
        assert!(matches!(result, Err(UploadError::UnsupportedType(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_retried() {
        let storage = Arc::new(RecordingStorage {
            puts: AtomicUsize::new(0),
            fail: true,
        });
        let result = pipeline(storage.clone())
            .process(request(Some(token("42")), "image/jpeg", JPEG))
            .await;

        assert!(matches!(result, Err(UploadError::StorageFailure(_))));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prepare_direct_upload() {
        let storage = Arc::new(RecordingStorage::default());
        let presigned = pipeline(storage.clone())
            .prepare_direct_upload(Some(&token("42")), Some("cat.JPG"), None)
            .await
            .unwrap();

        assert!(presigned.object_key.starts_with("users/42/images/"));
        assert!(presigned.object_key.ends_with(".jpeg"));
        assert!(presigned.upload_url.contains(&presigned.object_key));
        assert!(presigned.image_url.ends_with(&presigned.object_key));
        assert!(presigned.expires_at > Utc::now());
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_prepare_direct_upload_requires_filename() {
        let storage = Arc::new(RecordingStorage::default());
        let result = pipeline(storage)
            .prepare_direct_upload(Some(&token("42")), None, None)
            .await;
        assert!(matches!(result, Err(UploadError::InvalidInput(_))));
    }
}
