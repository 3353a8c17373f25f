use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use hp_auth::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Invalid session id: {value} {location}")]
    InvalidSessionId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Session is not signed in {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl SessionError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        SessionError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
