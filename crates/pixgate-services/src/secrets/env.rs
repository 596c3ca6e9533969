use super::{SecretError, SecretProvider};
use async_trait::async_trait;

/// Secret taken from `JWT_SECRET`, for local development
pub struct EnvSecretProvider {
    secret: String,
}

impl EnvSecretProvider {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn fetch_secret(&self) -> Result<String, SecretError> {
        Ok(self.secret.clone())
    }

    fn provider_name(&self) -> &'static str {
        "env"
    }
}
