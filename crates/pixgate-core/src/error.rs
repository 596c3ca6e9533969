//! Error types module
//!
//! Every failure an upload can hit is a variant of `UploadError`. The set is
//! closed: each variant maps to exactly one row of the response table through
//! `ErrorMetadata`, and anything that does not belong to a known kind is
//! carried by one of the unmapped variants, which all render as the generic
//! internal-error response.
//!
//! | Variant | Status | Code | Message |
//! |---|---|---|---|
//! | `CredentialMissing` | 401 | AUTH-003 | Token missing |
//! | `CredentialExpired` | 401 | AUTH-003 | Token has expired |
//! | `CredentialInvalid` | 401 | AUTH-003 | Invalid token |
//! | `UnsupportedType` | 400 | IMAGE-003 | Invalid file type |
//! | `SignatureMismatch` | 400 | IMAGE-004 | Invalid file signature (MIME type spoofing detected) |
//! | `PayloadTooLarge` | 413 | IMAGE-002 | File too large |
//! | `InvalidInput` | 400 | COMMON-001 | Invalid input data |
//! | everything else | 500 | COMMON-999 | Internal server error |

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like credential failures
    Debug,
    /// Warning level - for rejected payloads worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Stable machine-readable code (e.g. "AUTH-003")
    fn error_code(&self) -> &'static str;

    /// Client-facing message; never carries internal detail
    fn client_message(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Token missing")]
    CredentialMissing,

    #[error("Token has expired")]
    CredentialExpired,

    #[error("Invalid token: {0}")]
    CredentialInvalid(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Payload does not carry the {content_type} signature")]
    SignatureMismatch { content_type: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Signing secret unavailable: {0}")]
    SecretUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

impl From<anyhow::Error> for UploadError {
    fn from(err: anyhow::Error) -> Self {
        UploadError::Internal(format!("{:#}", err))
    }
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, client_message, log_level).
fn upload_error_static_metadata(err: &UploadError) -> (u16, &'static str, &'static str, LogLevel) {
    match err {
        UploadError::CredentialMissing => (401, "AUTH-003", "Token missing", LogLevel::Debug),
        UploadError::CredentialExpired => (401, "AUTH-003", "Token has expired", LogLevel::Debug),
        UploadError::CredentialInvalid(_) => (401, "AUTH-003", "Invalid token", LogLevel::Debug),
        UploadError::UnsupportedType(_) => (400, "IMAGE-003", "Invalid file type", LogLevel::Debug),
        UploadError::SignatureMismatch { .. } => (
            400,
            "IMAGE-004",
            "Invalid file signature (MIME type spoofing detected)",
            LogLevel::Warn,
        ),
        UploadError::PayloadTooLarge { .. } => (413, "IMAGE-002", "File too large", LogLevel::Debug),
        UploadError::InvalidInput(_) => (400, "COMMON-001", "Invalid input data", LogLevel::Debug),
        UploadError::StorageFailure(_)
        | UploadError::SecretUnavailable(_)
        | UploadError::Internal(_) => (
            500,
            "COMMON-999",
            "Internal server error",
            LogLevel::Error,
        ),
    }
}

impl UploadError {
    /// Get the variant name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            UploadError::CredentialMissing => "CredentialMissing",
            UploadError::CredentialExpired => "CredentialExpired",
            UploadError::CredentialInvalid(_) => "CredentialInvalid",
            UploadError::UnsupportedType(_) => "UnsupportedType",
            UploadError::PayloadTooLarge { .. } => "PayloadTooLarge",
            UploadError::SignatureMismatch { .. } => "SignatureMismatch",
            UploadError::InvalidInput(_) => "InvalidInput",
            UploadError::StorageFailure(_) => "StorageFailure",
            UploadError::SecretUnavailable(_) => "SecretUnavailable",
            UploadError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for UploadError {
    fn http_status_code(&self) -> u16 {
        upload_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        upload_error_static_metadata(self).1
    }

    fn client_message(&self) -> &'static str {
        upload_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        upload_error_static_metadata(self).3
    }
}
