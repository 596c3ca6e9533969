//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The upload pipeline only ever writes: it derives a key, puts the bytes,
/// and hands the public URL back to the caller. Backends never retry; retry
/// policy, if any, belongs to the underlying client.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `storage_key` and return the public URL of the object
    async fn put_object(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Public URL for a key, built deterministically from backend settings
    fn public_url(&self, storage_key: &str) -> String;

    /// Generate a presigned PUT URL for direct uploads.
    ///
    /// Clients can upload with HTTP PUT to the returned URL. Only supported by S3 backends;
    /// other backends return a `ConfigError`.
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

impl From<StorageError> for pixgate_core::UploadError {
    fn from(err: StorageError) -> Self {
        pixgate_core::UploadError::StorageFailure(err.to_string())
    }
}
