//! Collaborator construction

use crate::state::AppState;
use anyhow::{Context, Result};
use pixgate_core::Config;
use pixgate_services::create_secret_provider;
use pixgate_storage::create_storage;
use std::sync::Arc;

/// Build storage and the secret provider from configuration.
///
/// The signing secret itself is not fetched here; the first request does that.
pub async fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(backend = %storage.backend_type(), "Storage backend ready");

    let secret_provider = create_secret_provider(config)
        .await
        .context("Failed to initialize secret provider")?;
    tracing::info!(
        provider = secret_provider.provider_name(),
        "Secret provider ready"
    );

    Ok(Arc::new(AppState::new(storage, secret_provider)))
}
