use crate::IdentityClaims;

use serde::Serialize;
use serde_json::Value;

/// Namespace of the provider's custom user-metadata claim.
pub const DEFAULT_METADATA_NAMESPACE: &str = "https://myapp.example.com";

/// Display details carried in the namespaced `user_metadata` claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserMetadata {
    pub tenant_id: Option<String>,
}

impl UserMetadata {
    pub fn from_claims(claims: &IdentityClaims, namespace: &str) -> Self {
        let key = format!("{}/user_metadata", namespace.trim_end_matches('/'));
        let tenant_id = claims
            .claim(&key)
            .and_then(|metadata| metadata.get("tenantid"))
            .and_then(Value::as_str)
            .map(String::from);

        Self { tenant_id }
    }
}
