use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Login state does not match the pending sign-in {location}")]
    StateMismatch { location: ErrorLocation },

    #[error("Cannot {action} while {state} {location}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("Identity provider misconfigured: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::StateMismatch { .. } => "STATE_MISMATCH",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Provider { .. } => "PROVIDER_ERROR",
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
