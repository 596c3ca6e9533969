use super::{SecretError, SecretProvider};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide cache for the signing secret.
///
/// The first successful fetch is kept until the process exits; a rotated
/// secret only takes effect after a restart. Failed fetches are not cached, so
/// the next call tries the provider again. The lock is never held across the
/// provider call: concurrent first callers may each fetch, and the last write
/// wins with the same value.
pub struct SecretCache {
    provider: Arc<dyn SecretProvider>,
    cached: RwLock<Option<Arc<str>>>,
}

impl SecretCache {
    pub fn new(provider: Arc<dyn SecretProvider>) -> Self {
        Self {
            provider,
            cached: RwLock::new(None),
        }
    }

    /// Cached secret, fetching it on first use
    pub async fn get_secret(&self) -> Result<Arc<str>, SecretError> {
        if let Some(secret) = self.cached.read().await.as_ref() {
            return Ok(Arc::clone(secret));
        }

        self.fetch_and_store().await
    }

    /// Drop the cached value and fetch again.
    ///
    /// Never called on the request path.
    pub async fn refresh(&self) -> Result<Arc<str>, SecretError> {
        self.cached.write().await.take();
        self.fetch_and_store().await
    }

    #[cfg(test)]
    async fn is_cached(&self) -> bool {
        self.cached.read().await.is_some()
    }

    async fn fetch_and_store(&self) -> Result<Arc<str>, SecretError> {
        let secret: Arc<str> = self.provider.fetch_secret().await?.into();

        *self.cached.write().await = Some(Arc::clone(&secret));

        tracing::debug!(
            provider = self.provider.provider_name(),
            "Signing secret cached"
        );

        Ok(secret)
    }
}
