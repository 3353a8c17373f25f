//! REST API error types
//!
//! Every failure leaves the gateway as `{"error": {"code", "message", "field"}}`
//! with a matching status code.

use hp_auth::AuthError;
use hp_session::SessionError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "BAD_REQUEST")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Sign-in missing or rejected (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Request cannot be honored in the session's current state (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthorized {
                code,
                message,
                field,
                ..
            } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::InvalidTransition { action, state, .. } => ApiError::Conflict {
                message: format!("Cannot {action} while {state}"),
                location,
            },
            AuthError::Provider { ref message, .. } => {
                log::error!("{e}");
                ApiError::Internal {
                    message: message.clone(),
                    location,
                }
            }
            other => ApiError::Unauthorized {
                code: other.error_code(),
                message: public_message(&other),
                field: other.field(),
                location,
            },
        }
    }
}

impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Auth(source) => source.into(),
            SessionError::NotSignedIn { .. } => ApiError::Unauthorized {
                code: "NOT_SIGNED_IN",
                message: "Sign in to continue".to_string(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            SessionError::InvalidSessionId { .. } => ApiError::bad_request("Invalid session id"),
        }
    }
}

/// Client-facing text for an identity failure, without source locations.
pub fn public_message(e: &AuthError) -> String {
    match e {
        AuthError::InvalidToken { message, .. } => format!("Invalid sign-in token: {message}"),
        AuthError::TokenExpired { .. } => "Sign-in token has expired".to_string(),
        AuthError::JwtDecode { source, .. } => format!("Sign-in token rejected: {source}"),
        AuthError::InvalidClaim { claim, message, .. } => {
            format!("Invalid claim '{claim}': {message}")
        }
        AuthError::StateMismatch { .. } => {
            "Sign-in response does not match the pending sign-in".to_string()
        }
        AuthError::InvalidTransition { action, state, .. } => {
            format!("Cannot {action} while {state}")
        }
        AuthError::Provider { message, .. } => message.clone(),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
