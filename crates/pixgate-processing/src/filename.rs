//! Filename checks for presigned uploads, where the bytes never pass
//! through this service and the extension is all there is to go on.

use std::path::Path;

use crate::validator::{ValidationError, ALLOWED_CONTENT_TYPES};

/// Content type implied by a filename's extension (case-insensitive)
pub fn infer_content_type(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Validate a client-supplied filename and optional content type.
///
/// Returns the content type the object will be stored as. A declared type must
/// be allow-listed and agree with the extension.
pub fn validate_image_filename(
    filename: &str,
    declared_type: Option<&str>,
) -> Result<&'static str, ValidationError> {
    let filename = filename.trim();
    if filename.is_empty() {
        return Err(ValidationError::InvalidFilename(
            "filename is required".to_string(),
        ));
    }

    let inferred = infer_content_type(filename).ok_or_else(|| ValidationError::UnsupportedType {
        content_type: filename.to_string(),
        allowed: ALLOWED_CONTENT_TYPES,
    })?;

    match declared_type {
        None => Ok(inferred),
        Some(declared) if declared == inferred => Ok(inferred),
        Some(declared) => Err(ValidationError::UnsupportedType {
            content_type: declared.to_string(),
            allowed: ALLOWED_CONTENT_TYPES,
        }),
    }
}
