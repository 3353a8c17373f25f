mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod modules_config;
mod server_config;
mod session_config;
mod tenant_api_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use modules_config::ModulesConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;
pub use tenant_api_config::TenantApiConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:3001";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 30;
const MAX_LOGIN_TIMEOUT_SECS: u64 = 600;

const DEFAULT_TENANT_TIMEOUT_SECS: u64 = 10;
const MAX_TENANT_TIMEOUT_SECS: u64 = 120;

const DEFAULT_COOKIE_NAME: &str = "hp_session";
const DEFAULT_MAX_SESSIONS: usize = 10_000;
const MAX_MAX_SESSIONS: usize = 1_000_000;
