use super::{SecretError, SecretProvider};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::Client as SsmClient;

/// Secret stored as a SecureString in SSM Parameter Store
pub struct SsmSecretProvider {
    client: SsmClient,
    parameter_name: String,
}

impl SsmSecretProvider {
    pub async fn new(region: &str, parameter_name: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: SsmClient::new(&config),
            parameter_name,
        }
    }
}

#[async_trait]
impl SecretProvider for SsmSecretProvider {
    async fn fetch_secret(&self) -> Result<String, SecretError> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .get_parameter()
            .name(&self.parameter_name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    parameter = %self.parameter_name,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "SSM GetParameter failed"
                );
                SecretError::Provider(e.to_string())
            })?;

        let value = output
            .parameter()
            .and_then(|p| p.value())
            .ok_or_else(|| SecretError::NotFound(self.parameter_name.clone()))?;

        tracing::info!(
            parameter = %self.parameter_name,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Signing secret fetched from SSM"
        );

        Ok(value.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "ssm"
    }
}
