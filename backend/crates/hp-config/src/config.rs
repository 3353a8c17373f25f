use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, LoggingConfig, ModulesConfig, ServerConfig,
    SessionConfig, TenantApiConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

const CONFIG_DIR_ENV: &str = "HP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hp";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub tenant_api: TenantApiConfig,
    pub modules: ModulesConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for HP_CONFIG_DIR env var, else use ./.hp/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HP_CONFIG_DIR env var > ./.hp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.tenant_api.validate()?;
        self.modules.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn tenant_timeout(&self) -> Duration {
        Duration::from_secs(self.tenant_api.timeout_secs)
    }

    /// `None` when the sign-in spinner is unbounded.
    pub fn login_timeout(&self) -> Option<Duration> {
        match self.auth.login_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (public {})",
            self.server.host, self.server.port, self.server.public_url
        );
        info!(
            "  auth: client={} ({}), login timeout={}s",
            self.auth.client_id,
            self.auth.algorithm_name(),
            self.auth.login_timeout_secs
        );
        info!(
            "  tenant_api: {} (timeout {}s)",
            self.tenant_api.host, self.tenant_api.timeout_secs
        );
        info!(
            "  modules: voice assistant {}",
            self.modules
                .voice_assistant_url
                .as_deref()
                .unwrap_or("(in-portal)")
        );
        info!(
            "  session: cookie={}, max={}",
            self.session.cookie_name, self.session.max_sessions
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HP_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("HP_SERVER_PUBLIC_URL", &mut self.server.public_url);
        Self::apply_env_list("HP_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Auth
        Self::apply_env_string("HP_AUTH_AUTHORIZE_URL", &mut self.auth.authorize_url);
        Self::apply_env_string("HP_AUTH_LOGOUT_URL", &mut self.auth.logout_url);
        Self::apply_env_string("HP_AUTH_CLIENT_ID", &mut self.auth.client_id);
        Self::apply_env_string("HP_AUTH_REDIRECT_URI", &mut self.auth.redirect_uri);
        Self::apply_env_option_string("HP_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "HP_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_option_string("HP_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_option_string("HP_AUTH_AUDIENCE", &mut self.auth.audience);
        Self::apply_env_string(
            "HP_AUTH_ORG_CLAIM_FALLBACK",
            &mut self.auth.org_claim_fallback,
        );
        Self::apply_env_parse(
            "HP_AUTH_LOGIN_TIMEOUT_SECS",
            &mut self.auth.login_timeout_secs,
        );

        // Tenant API
        Self::apply_env_string("HP_TENANT_API_HOST", &mut self.tenant_api.host);
        Self::apply_env_parse(
            "HP_TENANT_API_TIMEOUT_SECS",
            &mut self.tenant_api.timeout_secs,
        );

        // Modules
        Self::apply_env_option_string(
            "HP_MODULES_VOICE_ASSISTANT_URL",
            &mut self.modules.voice_assistant_url,
        );

        // Session
        Self::apply_env_string("HP_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_parse("HP_SESSION_MAX_SESSIONS", &mut self.session.max_sessions);
        Self::apply_env_bool("HP_SESSION_SECURE_COOKIE", &mut self.session.secure_cookie);

        // Logging
        Self::apply_env_parse("HP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HP_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
