use crate::IdentityClaims;

use std::time::Instant;

use serde::Serialize;

/// Where a visitor is in the sign-in lifecycle.
#[derive(Debug, Clone)]
pub enum GateState {
    Unauthenticated,
    /// Login started at the provider; claims and tenant not yet resolved.
    Authenticating {
        return_to: Option<String>,
        nonce: String,
        started_at: Instant,
    },
    Authorized {
        claims: Box<IdentityClaims>,
        return_to: Option<String>,
    },
    /// Identity provider failure. Stays here until the visitor retries login.
    Error { message: String },
}

impl GateState {
    pub fn status(&self) -> GateStatus {
        match self {
            Self::Unauthenticated => GateStatus::Unauthenticated,
            Self::Authenticating { .. } => GateStatus::Authenticating,
            Self::Authorized { .. } => GateStatus::Authorized,
            Self::Error { .. } => GateStatus::Error,
        }
    }
}

/// Payload-free view of [`GateState`] for logging and client responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    Unauthenticated,
    Authenticating,
    Authorized,
    Error,
}

impl GateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authorized => "authorized",
            Self::Error => "error",
        }
    }
}
