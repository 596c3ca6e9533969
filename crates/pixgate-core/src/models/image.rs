use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound upload, as handed over by the transport
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Bearer token without the `Bearer ` prefix; `None` when the header is absent
    pub credential: Option<String>,
    /// Declared `Content-Type`; `None` when the header is absent
    pub declared_content_type: Option<String>,
    pub payload: Vec<u8>,
    /// Size reported for the payload. Equals `payload.len()` unless the body
    /// was refused by the transport for being too large, in which case the
    /// payload is empty and this carries the declared length.
    pub size_bytes: usize,
    /// Caller-supplied original filename (`X-Filename`)
    pub original_filename_hint: Option<String>,
}

/// Metadata describing a stored image, returned to the caller
///
/// Nothing here is persisted by this service; the backend that later links
/// the URL to a post or profile owns that record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub image_url: String,
    pub file_size: u64,
    pub original_filename: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ImageMetadata {
    /// Build metadata for a freshly stored object.
    ///
    /// A missing or blank filename hint becomes `image-{millis}`.
    pub fn new(
        image_url: String,
        file_size: u64,
        original_filename_hint: Option<&str>,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        let original_filename = match original_filename_hint.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("image-{}", uploaded_at.timestamp_millis()),
        };

        Self {
            image_url,
            file_size,
            original_filename,
            uploaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_metadata_serializes_camel_case() {
        let uploaded_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let metadata = ImageMetadata::new(
            "https://bucket.s3.ap-northeast-2.amazonaws.com/users/1/images/a.png".to_string(),
            42,
            Some("cat.png"),
            uploaded_at,
        );
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["fileSize"], 42);
        assert_eq!(json["originalFilename"], "cat.png");
        assert!(json["imageUrl"].as_str().unwrap().ends_with("a.png"));
        assert_eq!(json["uploadedAt"], "2025-01-02T03:04:05Z");
    }

    #[test]
    fn test_missing_filename_defaults_to_timestamped_name() {
        let uploaded_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let metadata = ImageMetadata::new("u".to_string(), 1, None, uploaded_at);
        assert_eq!(metadata.original_filename, "image-1700000000123");

        let metadata = ImageMetadata::new("u".to_string(), 1, Some("  "), uploaded_at);
        assert_eq!(metadata.original_filename, "image-1700000000123");
    }
}
