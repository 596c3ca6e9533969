//! Content checks applied to uploaded images before anything is stored.

pub mod filename;
pub mod validator;

pub use filename::{infer_content_type, validate_image_filename};
pub use validator::{ContentValidator, ValidationError, ALLOWED_CONTENT_TYPES};
