//! Shared key generation for storage backends.
//!
//! Key format: `users/{subject_id}/images/{unix_millis}-{uuid_v4}.{extension}`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::traits::{StorageError, StorageResult};

/// Extension derived from a MIME type: the part after the `/`.
///
/// `image/jpeg` gives `jpeg`, never `jpg`.
pub fn extension_for_content_type(content_type: &str) -> Option<&str> {
    match content_type.split_once('/') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Generate the object key for an image uploaded by `subject_id` at `now`.
///
/// The subject becomes a path segment, so it must be non-empty and must not
/// contain `/` or `..`.
pub fn generate_image_key(
    subject_id: &str,
    content_type: &str,
    now: DateTime<Utc>,
) -> StorageResult<String> {
    if subject_id.is_empty() || subject_id.contains('/') || subject_id.contains("..") {
        return Err(StorageError::InvalidKey(format!(
            "subject id cannot be used as a key segment: {:?}",
            subject_id
        )));
    }

    let extension = extension_for_content_type(content_type).ok_or_else(|| {
        StorageError::InvalidKey(format!("no extension for content type {}", content_type))
    })?;

    Ok(format!(
        "users/{}/images/{}-{}.{}",
        subject_id,
        now.timestamp_millis(),
        Uuid::new_v4(),
        extension
    ))
}
