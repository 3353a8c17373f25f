use std::time::Duration;

use hp_auth::{DEFAULT_METADATA_NAMESPACE, DEFAULT_ORG_CLAIM_FALLBACK};

const DEFAULT_TENANT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings every session is created with.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Claim consulted when `org_name` is missing or blank
    pub org_claim_fallback: String,
    pub metadata_namespace: String,
    pub login_timeout: Option<Duration>,
    pub tenant_timeout: Duration,
    /// Voice assistant location; when unset its page is mounted in-portal
    pub voice_assistant_url: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            org_claim_fallback: String::from(DEFAULT_ORG_CLAIM_FALLBACK),
            metadata_namespace: String::from(DEFAULT_METADATA_NAMESPACE),
            login_timeout: None,
            tenant_timeout: DEFAULT_TENANT_TIMEOUT,
            voice_assistant_url: None,
        }
    }
}
