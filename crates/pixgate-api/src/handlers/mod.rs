pub mod health;
pub mod image_upload;
pub mod presigned_upload;
