use crate::server_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_TENANT_TIMEOUT_SECS, MAX_TENANT_TIMEOUT_SECS};

use serde::Deserialize;

/// Where tenant configurations are fetched from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TenantApiConfig {
    /// Base URL; requests go to `{host}/retrieve/{org}`
    pub host: String,
    pub timeout_secs: u64,
}

impl Default for TenantApiConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            timeout_secs: DEFAULT_TENANT_TIMEOUT_SECS,
        }
    }
}

impl TenantApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.host) {
            return Err(ConfigError::tenant_api(format!(
                "tenant_api.host must be an http(s) URL, got '{}'",
                self.host
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TENANT_TIMEOUT_SECS {
            return Err(ConfigError::tenant_api(format!(
                "tenant_api.timeout_secs must be 1-{}, got {}",
                MAX_TENANT_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
