use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] hp_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] hp_auth::AuthError),

    #[error("Tenant API setup error: {0}")]
    Tenant(#[from] hp_tenant::TenantError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
