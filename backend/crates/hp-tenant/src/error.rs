use std::panic::Location;
use std::result::Result as StdResult;
use std::time::Duration;

use error_location::ErrorLocation;
use hp_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TenantError {
    #[error("Tenant API request failed: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Tenant API returned HTTP {status} for {url} {location}")]
    Status {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("Tenant API returned an unreadable configuration: {source} {location}")]
    Json {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid tenant API URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Tenant configuration for '{org_id}' not received within {}s {location}", .timeout.as_secs())]
    Timeout {
        org_id: String,
        timeout: Duration,
        location: ErrorLocation,
    },
}

impl TenantError {
    #[track_caller]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        TenantError::Http {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        TenantError::Status {
            status,
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_core(source: CoreError) -> Self {
        TenantError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        TenantError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(org_id: impl Into<String>, timeout: Duration) -> Self {
        TenantError::Timeout {
            org_id: org_id.into(),
            timeout,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, TenantError>;
