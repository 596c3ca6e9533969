use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use pixgate_services::{SecretError, SecretProvider};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SECRET: &str = "integration-test-signing-secret";

/// Secret provider that counts fetches
pub struct CountingSecretProvider {
    secret: String,
    fetches: AtomicUsize,
}

impl CountingSecretProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretProvider for CountingSecretProvider {
    async fn fetch_secret(&self) -> Result<String, SecretError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.secret.clone())
    }

    fn provider_name(&self) -> &'static str {
        "counting"
    }
}

fn sign(claims: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Valid token for `sub`, expiring in ten minutes
pub fn user_token(sub: &str) -> String {
    sign(
        json!({"sub": sub, "email": format!("{}@example.com", sub), "exp": Utc::now().timestamp() + 600}),
        TEST_SECRET,
    )
}

pub fn guest_token(sub: &str) -> String {
    sign(
        json!({"sub": sub, "role": "GUEST", "exp": Utc::now().timestamp() + 600}),
        TEST_SECRET,
    )
}

/// Correctly signed token that expired an hour ago
pub fn expired_token(sub: &str) -> String {
    sign(
        json!({"sub": sub, "exp": Utc::now().timestamp() - 3600}),
        TEST_SECRET,
    )
}

/// Unexpired token signed with the wrong secret
pub fn forged_token(sub: &str) -> String {
    sign(
        json!({"sub": sub, "exp": Utc::now().timestamp() + 600}),
        "not-the-signing-secret",
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
