use crate::server_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_TIMEOUT_SECS, MAX_LOGIN_TIMEOUT_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

const DEFAULT_ORG_CLAIM_FALLBACK: &str = "https://yourdomain/org_name";
const DEFAULT_METADATA_NAMESPACE: &str = "https://myapp.example.com";

/// Identity provider registration and ID-token verification settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub authorize_url: String,
    pub logout_url: String,
    pub client_id: String,
    /// Callback URL registered at the provider
    pub redirect_uri: String,
    /// HS256 secret (at least 32 characters)
    pub jwt_secret: Option<String>,
    /// RS256 public key, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub issuer: Option<String>,
    /// Expected `aud`; usually the client id
    pub audience: Option<String>,
    /// Namespaced claim consulted when `org_name` is missing
    pub org_claim_fallback: String,
    pub metadata_namespace: String,
    /// Upper bound on the sign-in spinner (0 = no limit)
    pub login_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            authorize_url: String::new(),
            logout_url: String::new(),
            client_id: String::new(),
            redirect_uri: String::new(),
            jwt_secret: None,
            jwt_public_key_path: None,
            issuer: None,
            audience: None,
            org_claim_fallback: String::from(DEFAULT_ORG_CLAIM_FALLBACK),
            metadata_namespace: String::from(DEFAULT_METADATA_NAMESPACE),
            login_timeout_secs: DEFAULT_LOGIN_TIMEOUT_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("auth.authorize_url", &self.authorize_url),
            ("auth.logout_url", &self.logout_url),
            ("auth.redirect_uri", &self.redirect_uri),
        ] {
            if !is_http_url(value) {
                return Err(ConfigError::auth(format!(
                    "{name} must be an http(s) URL, got '{value}'"
                )));
            }
        }

        if self.client_id.trim().is_empty() {
            return Err(ConfigError::auth("auth.client_id is required"));
        }

        if self.org_claim_fallback.trim().is_empty() {
            return Err(ConfigError::auth("auth.org_claim_fallback cannot be empty"));
        }

        if self.login_timeout_secs > MAX_LOGIN_TIMEOUT_SECS {
            return Err(ConfigError::auth(format!(
                "auth.login_timeout_secs must be 0-{}, got {}",
                MAX_LOGIN_TIMEOUT_SECS, self.login_timeout_secs
            )));
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(secret), _) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config directory",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path does not exist: {}",
                        full_path.display()
                    )));
                }
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "either auth.jwt_secret or auth.jwt_public_key_path is required",
                ));
            }
        }

        Ok(())
    }

    /// Algorithm name for the startup summary.
    pub fn algorithm_name(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }
}
