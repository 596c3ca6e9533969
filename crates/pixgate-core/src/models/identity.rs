use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Role carried by a verified credential.
///
/// `Guest` tokens are short-lived and issued during pre-registration so a
/// profile image can be uploaded before the account exists. The role is
/// informational: nothing in the upload path is gated on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Guest,
    /// Any other role string, passed through unchanged.
    Other(String),
}

impl Role {
    /// Resolve the role claim; absent or empty claims mean `User`.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            None | Some("") | Some("USER") => Role::User,
            Some("GUEST") => Role::Guest,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "USER",
            Role::Guest => "GUEST",
            Role::Other(other) => other,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Role::Guest)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_claim(Some(value.as_str()))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Identity extracted from a successfully verified credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub subject_id: String,
    pub email: Option<String>,
    pub role: Role,
}
