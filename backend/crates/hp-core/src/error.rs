use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tenant configuration parse failed: {source} {location}")]
    TenantConfigParse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid tenant configuration: {message} {location}")]
    InvalidTenantConfig {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        CoreError::TenantConfigParse {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_tenant_config<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidTenantConfig {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
