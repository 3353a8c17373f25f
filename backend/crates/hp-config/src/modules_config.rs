use crate::server_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Settings for page modules hosted outside the portal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Where the voice assistant lives; its route redirects here when set
    pub voice_assistant_url: Option<String>,
}

impl ModulesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.voice_assistant_url
            && !is_http_url(url)
        {
            return Err(ConfigError::modules(format!(
                "modules.voice_assistant_url must be an http(s) URL, got '{url}'"
            )));
        }

        Ok(())
    }
}
