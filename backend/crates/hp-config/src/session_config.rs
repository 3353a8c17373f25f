use crate::{ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_MAX_SESSIONS, MAX_MAX_SESSIONS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Maximum concurrently tracked visitor sessions
    pub max_sessions: usize,
    /// Mark the session cookie `Secure`
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            max_sessions: DEFAULT_MAX_SESSIONS,
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let valid_name = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_name {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty and use [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        if self.max_sessions == 0 || self.max_sessions > MAX_MAX_SESSIONS {
            return Err(ConfigError::session(format!(
                "session.max_sessions must be 1-{}, got {}",
                MAX_MAX_SESSIONS, self.max_sessions
            )));
        }

        Ok(())
    }
}
