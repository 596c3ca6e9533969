use std::collections::HashSet;
use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use pixgate_core::{UploadError, UploadResult, VerifiedIdentity};
use pixgate_services::SecretCache;

use super::models::Claims;

/// Verifies HMAC-signed bearer tokens against the cached signing secret
pub struct CredentialVerifier {
    secrets: Arc<SecretCache>,
    validation: Validation,
}

impl CredentialVerifier {
    pub fn new(secrets: Arc<SecretCache>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        // `exp` is checked when present but not required
        validation.required_spec_claims = HashSet::new();

        Self {
            secrets,
            validation,
        }
    }

    /// Verify a bearer token and return the identity it carries.
    ///
    /// The secret is not fetched for a missing token.
    pub async fn verify(&self, token: Option<&str>) -> UploadResult<VerifiedIdentity> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(UploadError::CredentialMissing)?;

        let secret = self.secrets.get_secret().await?;
        let key = DecodingKey::from_secret(secret.as_bytes());

        let token_data = decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "JWT validation failed");
            match e.kind() {
                ErrorKind::ExpiredSignature => UploadError::CredentialExpired,
                _ => UploadError::CredentialInvalid(e.to_string()),
            }
        })?;

        // Expired from the `exp` second onwards
        if matches!(token_data.claims.exp, Some(exp) if exp <= chrono::Utc::now().timestamp()) {
            return Err(UploadError::CredentialExpired);
        }

        if token_data.claims.sub.trim().is_empty() {
            return Err(UploadError::CredentialInvalid(
                "empty subject claim".to_string(),
            ));
        }

        Ok(token_data.claims.into())
    }
}
