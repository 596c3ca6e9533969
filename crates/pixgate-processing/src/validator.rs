use pixgate_core::constants::MAX_IMAGE_SIZE_BYTES;
use pixgate_core::UploadError;

/// Content types accepted for upload
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

/// Leading bytes every payload of a declared type must start with
static SIGNATURES: &[(&str, &[u8])] = &[
    ("image/jpeg", &[0xFF, 0xD8, 0xFF]),
    ("image/png", &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
    ("image/gif", &[0x47, 0x49, 0x46, 0x38]),
];

/// Validation errors for uploaded images
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    UnsupportedType {
        content_type: String,
        allowed: &'static [&'static str],
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Payload does not start with the {content_type} signature")]
    SignatureMismatch { content_type: String },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

impl From<ValidationError> for UploadError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnsupportedType { content_type, .. } => {
                UploadError::UnsupportedType(content_type)
            }
            ValidationError::PayloadTooLarge { size, max } => {
                UploadError::PayloadTooLarge { size, max }
            }
            ValidationError::SignatureMismatch { content_type } => {
                UploadError::SignatureMismatch { content_type }
            }
            ValidationError::InvalidFilename(reason) => UploadError::InvalidInput(reason),
        }
    }
}

/// Image content validator
///
/// Runs the allow-list, size and signature checks in that order and stops at
/// the first failure, so the byte-level comparison only ever runs on payloads
/// that already passed the cheap checks.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    max_file_size: usize,
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new(MAX_IMAGE_SIZE_BYTES)
    }
}

impl ContentValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate a declared content type against the allow-list.
    ///
    /// Matching is exact: no case folding, no parameters.
    pub fn validate_content_type(&self, declared_type: &str) -> Result<(), ValidationError> {
        if !ALLOWED_CONTENT_TYPES.contains(&declared_type) {
            return Err(ValidationError::UnsupportedType {
                content_type: declared_type.to_string(),
                allowed: ALLOWED_CONTENT_TYPES,
            });
        }
        Ok(())
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::PayloadTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Compare the payload's leading bytes with the signature registered for
    /// `declared_type`. Types without a registered signature never pass.
    pub fn validate_signature(
        &self,
        declared_type: &str,
        payload: &[u8],
    ) -> Result<(), ValidationError> {
        let matches = SIGNATURES
            .iter()
            .find(|(content_type, _)| *content_type == declared_type)
            .is_some_and(|(_, signature)| payload.starts_with(signature));

        if !matches {
            tracing::warn!(
                declared_type = %declared_type,
                leading_bytes = ?&payload[..payload.len().min(8)],
                "Payload signature does not match declared content type"
            );
            return Err(ValidationError::SignatureMismatch {
                content_type: declared_type.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate(
        &self,
        declared_type: &str,
        size_bytes: usize,
        payload: &[u8],
    ) -> Result<(), ValidationError> {
        self.validate_content_type(declared_type)?;
        self.validate_file_size(size_bytes)?;
        self.validate_signature(declared_type, payload)?;
        Ok(())
    }
}
