//! Configuration module
//!
//! Configuration is read once from the environment at process start (a `.env`
//! file is honoured for local development) and is otherwise opaque to the
//! upload pipeline.

use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_SECRET_PARAMETER};
use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 4000;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Where the credential signing secret comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// AWS SSM Parameter Store, decrypted with KMS
    Ssm,
    /// `JWT_SECRET` environment variable (local development)
    Env,
}

impl FromStr for SecretSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ssm" => Ok(SecretSource::Ssm),
            "env" => Ok(SecretSource::Env),
            _ => Err(anyhow::anyhow!("Invalid secret source: {}", s)),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    /// Maximum in-flight requests per process
    pub http_concurrency_limit: usize,
    /// Value of `Access-Control-Allow-Origin` on every response
    pub allowed_origin: String,
    pub aws_region: Option<String>,
    // Signing secret
    pub secret_source: SecretSource,
    pub jwt_secret_parameter: String,
    pub jwt_secret: Option<String>,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, LocalStack, ...)
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = non_empty("ENVIRONMENT")
            .or_else(|| non_empty("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match non_empty("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let http_concurrency_limit = match non_empty("HTTP_CONCURRENCY_LIMIT") {
            Some(limit) => limit
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be a valid number"))?
                .max(1),
            None => HTTP_CONCURRENCY_LIMIT,
        };

        let allowed_origin = non_empty("ALLOWED_ORIGIN")
            .or_else(|| non_empty("FRONTEND_URL"))
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());

        let secret_source = non_empty("SECRET_SOURCE")
            .map(|s| s.parse::<SecretSource>())
            .transpose()?
            .unwrap_or(SecretSource::Ssm);

        let storage_backend = non_empty("STORAGE_BACKEND")
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::S3);

        Ok(Config {
            server_port,
            environment,
            http_concurrency_limit,
            allowed_origin,
            aws_region: non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")),
            secret_source,
            jwt_secret_parameter: non_empty("JWT_SECRET_PARAMETER")
                .unwrap_or_else(|| DEFAULT_SECRET_PARAMETER.to_string()),
            jwt_secret: non_empty("JWT_SECRET"),
            storage_backend,
            s3_bucket: non_empty("S3_BUCKET"),
            s3_endpoint: non_empty("S3_ENDPOINT"),
            local_storage_path: non_empty("LOCAL_STORAGE_PATH"),
            local_storage_base_url: non_empty("LOCAL_STORAGE_BASE_URL"),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    /// Fail fast on combinations that cannot serve a single upload.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.secret_source {
            SecretSource::Ssm => {
                if self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "AWS_REGION must be set when SECRET_SOURCE=ssm"
                    ));
                }
                if !self.jwt_secret_parameter.starts_with('/') {
                    return Err(anyhow::anyhow!(
                        "JWT_SECRET_PARAMETER must be an absolute parameter path, got {}",
                        self.jwt_secret_parameter
                    ));
                }
            }
            SecretSource::Env => {
                if self.jwt_secret.is_none() {
                    return Err(anyhow::anyhow!(
                        "JWT_SECRET must be set when SECRET_SOURCE=env"
                    ));
                }
                if self.is_production() {
                    return Err(anyhow::anyhow!(
                        "SECRET_SOURCE=env is not allowed in production"
                    ));
                }
            }
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!("S3_BUCKET must be set for the s3 backend"));
                }
                if self.aws_region.is_none() {
                    return Err(anyhow::anyhow!("AWS_REGION must be set for the s3 backend"));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set for the local backend"
                    ));
                }
            }
        }

        Ok(())
    }
}
