use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim holding the organization (tenant) name.
pub const PRIMARY_ORG_CLAIM: &str = "org_name";

/// Namespaced custom claim consulted when `org_name` is missing.
pub const DEFAULT_ORG_CLAIM_FALLBACK: &str = "https://yourdomain/org_name";

/// Identity claims from a validated ID token.
///
/// Claims the portal does not model explicitly are kept in `extra`, which is
/// where namespaced custom claims end up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityClaims {
    /// Subject (user id at the identity provider)
    pub sub: String,
    /// Expiration timestamp (Unix)
    #[serde(default)]
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityClaims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Organization id used to look up the tenant configuration.
    ///
    /// `org_name` first, then `fallback_key`; an empty string when neither is
    /// present. Blank values count as missing.
    pub fn organization_id(&self, fallback_key: &str) -> String {
        self.org_name
            .as_deref()
            .filter(|org| !org.trim().is_empty())
            .or_else(|| {
                self.extra
                    .get(fallback_key)
                    .and_then(Value::as_str)
                    .filter(|org| !org.trim().is_empty())
            })
            .unwrap_or_default()
            .to_string()
    }

    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
