use pixgate_core::{Role, VerifiedIdentity};
use serde::{Deserialize, Deserializer, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id). Issuers encode it as a string or a bare number.
    #[serde(deserialize_with = "deserialize_subject")]
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl From<Claims> for VerifiedIdentity {
    fn from(claims: Claims) -> Self {
        VerifiedIdentity {
            role: Role::from_claim(claims.role.as_deref()),
            subject_id: claims.sub,
            email: claims.email,
        }
    }
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Subject {
        Text(String),
        Number(u64),
    }

    Ok(match Subject::deserialize(deserializer)? {
        Subject::Text(s) => s,
        Subject::Number(n) => n.to_string(),
    })
}
