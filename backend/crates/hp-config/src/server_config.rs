use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_URL, MIN_PORT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible origin, used for provider return URLs
    pub public_url: String,
    /// Browser origins allowed to call `/api` with credentials
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            public_url: String::from(DEFAULT_PUBLIC_URL),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign"
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if !is_http_url(&self.public_url) {
            return Err(ConfigError::server(format!(
                "server.public_url must start with http:// or https://, got '{}'",
                self.public_url
            )));
        }

        if let Some(origin) = self.cors_origins.iter().find(|o| !is_http_url(o)) {
            return Err(ConfigError::server(format!(
                "server.cors_origins entries must start with http:// or https://, got '{origin}'"
            )));
        }

        Ok(())
    }

    /// `public_url` joined with an absolute path.
    pub fn public_url_for(&self, path: &str) -> String {
        format!("{}{}", self.public_url.trim_end_matches('/'), path)
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
