//! Signing-secret retrieval and caching

mod cache;
mod env;
#[cfg(feature = "secrets-ssm")]
mod ssm;

pub use cache::SecretCache;
pub use env::EnvSecretProvider;
#[cfg(feature = "secrets-ssm")]
pub use ssm::SsmSecretProvider;

use async_trait::async_trait;
use pixgate_core::{Config, SecretSource, UploadError};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Secret parameter {0} not found")]
    NotFound(String),

    #[error("Secret provider error: {0}")]
    Provider(String),

    #[error("Secret provider not configured: {0}")]
    NotConfigured(String),
}

impl From<SecretError> for UploadError {
    fn from(err: SecretError) -> Self {
        UploadError::SecretUnavailable(err.to_string())
    }
}

/// Source of the credential signing secret
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the secret. Implementations that store it encrypted must return
    /// the decrypted value.
    async fn fetch_secret(&self) -> Result<String, SecretError>;

    /// Short name for logs
    fn provider_name(&self) -> &'static str;
}

/// Create a secret provider based on configuration
pub async fn create_secret_provider(
    config: &Config,
) -> Result<Arc<dyn SecretProvider>, SecretError> {
    match config.secret_source {
        #[cfg(feature = "secrets-ssm")]
        SecretSource::Ssm => {
            let region = config.aws_region.clone().ok_or_else(|| {
                SecretError::NotConfigured("AWS_REGION not configured".to_string())
            })?;
            let provider =
                SsmSecretProvider::new(&region, config.jwt_secret_parameter.clone()).await;
            Ok(Arc::new(provider))
        }

        #[cfg(not(feature = "secrets-ssm"))]
        SecretSource::Ssm => Err(SecretError::NotConfigured(
            "SSM secret provider not available (secrets-ssm feature not enabled)".to_string(),
        )),

        SecretSource::Env => {
            let secret = config.jwt_secret.clone().ok_or_else(|| {
                SecretError::NotConfigured("JWT_SECRET not configured".to_string())
            })?;
            Ok(Arc::new(EnvSecretProvider::new(secret)))
        }
    }
}
