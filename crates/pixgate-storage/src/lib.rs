//! Pixgate Storage Library
//!
//! This crate provides the object-store abstraction used by the upload
//! pipeline, with S3 and local filesystem implementations.
//!
//! # Object key format
//!
//! Every image lands under the uploader's namespace:
//!
//! `users/{subject_id}/images/{unix_millis}-{uuid_v4}.{extension}`
//!
//! The UUID v4 is the only collision guard; no existence check is made before
//! a write. Key generation is centralized in the `keys` module so all backends
//! and the presigned-URL flow stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{extension_for_content_type, generate_image_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use pixgate_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
