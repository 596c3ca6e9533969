//! Application-wide constants.

use std::time::Duration;

/// Upload size ceiling: 5 MiB.
pub const MAX_IMAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// SSM parameter holding the HMAC signing secret when none is configured.
pub const DEFAULT_SECRET_PARAMETER: &str = "/community/JWT_SECRET";

/// Success message returned in the upload envelope.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "upload_image_success";

/// Success message returned when a presigned upload URL is issued.
pub const PRESIGNED_URL_MESSAGE: &str = "presigned_url_generated";

/// Lifetime of presigned PUT URLs.
pub const PRESIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// Header carrying the caller's original filename.
pub const FILENAME_HEADER: &str = "x-filename";

/// Default allowed origin for CORS responses.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
