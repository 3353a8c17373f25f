use crate::{Result as SessionResult, SessionError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use uuid::Uuid;

/// Opaque visitor session identifier, carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[track_caller]
    pub fn parse(value: &str) -> SessionResult<Self> {
        let uuid = Uuid::parse_str(value).map_err(|_| SessionError::InvalidSessionId {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self(uuid))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
