//! Pixgate Services
//!
//! Collaborators the upload pipeline depends on at runtime.

pub mod secrets;

pub use secrets::{
    create_secret_provider, EnvSecretProvider, SecretCache, SecretError, SecretProvider,
};
#[cfg(feature = "secrets-ssm")]
pub use secrets::SsmSecretProvider;
