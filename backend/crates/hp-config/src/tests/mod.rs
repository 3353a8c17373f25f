
use std::env;

use tempfile::TempDir;

/// Minimal config that passes validation.
pub(crate) const VALID_TOML: &str = r#"
[auth]
authorize_url = "https://tenant.example.auth0.com/authorize"
logout_url = "https://tenant.example.auth0.com/v2/logout"
client_id = "portal-client"
redirect_uri = "http://localhost:3001/callback"
jwt_secret = "12345678901234567890123456789012"

[tenant_api]
host = "https://builder.example.com"
"#;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set HP_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("HP_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Temp config directory holding `VALID_TOML` followed by `extra`
pub(crate) fn setup_valid_config(extra: &str) -> (TempDir, EnvGuard) {
    let (temp, guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        format!("{VALID_TOML}\n{extra}"),
    )
    .unwrap();
    (temp, guard)
}
