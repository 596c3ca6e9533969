//! Pixgate Core Library
//!
//! This crate provides the domain models, the closed upload error taxonomy,
//! configuration, and constants shared by every Pixgate component.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, SecretSource};
pub use error::{ErrorMetadata, LogLevel, UploadError, UploadResult};
pub use models::{ImageMetadata, Role, UploadRequest, VerifiedIdentity};
pub use storage_types::StorageBackend;
