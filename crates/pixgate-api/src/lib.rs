//! Pixgate API Library
//!
//! HTTP handlers, the upload pipeline, and application setup.

mod api_doc;
mod handlers;

pub mod auth;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use auth::CredentialVerifier;
pub use error::{ApiEnvelope, ErrorResponse, HttpAppError};
pub use services::upload::UploadPipeline;
pub use state::AppState;
