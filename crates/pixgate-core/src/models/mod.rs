pub mod identity;
pub mod image;

pub use identity::{Role, VerifiedIdentity};
pub use image::{ImageMetadata, UploadRequest};
