use crate::{AuthError, GateDecision, GateState, GateStatus, IdentityClaims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

const LOGIN_TIMEOUT_MESSAGE: &str = "Sign-in is taking too long. Please try again.";

/// Gate in front of every protected path.
///
/// `Unauthenticated → Authenticating → Authorized`, with `Error` reachable
/// from `Authenticating`. Logout returns to `Unauthenticated` from anywhere.
#[derive(Debug, Clone)]
pub struct AuthGate {
    state: GateState,
    login_timeout: Option<Duration>,
}

impl AuthGate {
    /// `login_timeout` bounds how long a visitor may sit in `Authenticating`.
    pub fn new(login_timeout: Option<Duration>) -> Self {
        Self {
            state: GateState::Unauthenticated,
            login_timeout,
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn status(&self) -> GateStatus {
        self.state.status()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::Authorized { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GateState::Authenticating { .. })
    }

    pub fn claims(&self) -> Option<&IdentityClaims> {
        match &self.state {
            GateState::Authorized { claims, .. } => Some(claims.as_ref()),
            _ => None,
        }
    }

    /// Decide what a visit to a protected `path` may see.
    pub fn visit(&mut self, path: &str) -> GateDecision {
        self.expire_login();

        if matches!(self.state, GateState::Unauthenticated) {
            return GateDecision::StartLogin {
                nonce: self.start_login(path),
            };
        }

        match &self.state {
            GateState::Unauthenticated | GateState::Authenticating { .. } => GateDecision::Loading,
            GateState::Authorized { .. } => GateDecision::Render,
            GateState::Error { message } => GateDecision::ShowError {
                message: message.clone(),
            },
        }
    }

    /// Explicitly start a login, e.g. from a login button or after an error.
    ///
    /// Returns the nonce the provider must echo back as `state`.
    #[track_caller]
    pub fn begin_login(&mut self, return_to: &str) -> AuthErrorResult<String> {
        if self.is_authenticated() {
            return Err(AuthError::InvalidTransition {
                action: "begin login",
                state: self.status().as_str(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(self.start_login(return_to))
    }

    /// Pending login nonce, if a login is in flight.
    pub fn pending_nonce(&self) -> Option<&str> {
        match &self.state {
            GateState::Authenticating { nonce, .. } => Some(nonce),
            _ => None,
        }
    }

    /// Complete the login started with `nonce`.
    #[track_caller]
    pub fn authorize(&mut self, nonce: &str, claims: IdentityClaims) -> AuthErrorResult<()> {
        let return_to = match &mut self.state {
            GateState::Authenticating {
                nonce: pending,
                return_to,
                ..
            } => {
                if pending.as_str() != nonce {
                    warn!("Login callback state does not match pending login");
                    return Err(AuthError::StateMismatch {
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                return_to.take()
            }
            other => {
                return Err(AuthError::InvalidTransition {
                    action: "authorize",
                    state: other.status().as_str(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        info!("Visitor {} authorized", claims.sub);
        self.state = GateState::Authorized {
            claims: Box::new(claims),
            return_to,
        };
        Ok(())
    }

    /// Record an identity provider failure. No automatic retry follows.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.is_loading() {
            warn!("Sign-in failed: {message}");
            self.state = GateState::Error { message };
        } else {
            debug!("Ignoring sign-in failure while {}", self.status().as_str());
        }
    }

    /// Destination for the first navigation after login.
    ///
    /// Yields the captured path once; afterwards, or when nothing was
    /// captured, falls back to `default`.
    pub fn take_return_to(&mut self, default: Option<&str>) -> Option<String> {
        let captured = match &mut self.state {
            GateState::Authorized { return_to, .. } => return_to.take(),
            _ => None,
        };

        captured.or_else(|| default.map(String::from))
    }

    pub fn logout(&mut self) {
        if let GateState::Authorized { claims, .. } = &self.state {
            info!("Visitor {} signed out", claims.sub);
        }
        self.state = GateState::Unauthenticated;
    }

    fn start_login(&mut self, return_to: &str) -> String {
        let nonce = new_nonce();
        debug!("Starting login, return_to={return_to}");
        self.state = GateState::Authenticating {
            return_to: local_return_path(return_to),
            nonce: nonce.clone(),
            started_at: Instant::now(),
        };
        nonce
    }

    fn expire_login(&mut self) {
        let (Some(timeout), GateState::Authenticating { started_at, .. }) =
            (self.login_timeout, &self.state)
        else {
            return;
        };

        if started_at.elapsed() >= timeout {
            warn!("Sign-in exceeded {}s, giving up", timeout.as_secs());
            self.state = GateState::Error {
                message: LOGIN_TIMEOUT_MESSAGE.to_string(),
            };
        }
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Same-origin destination carried by `path`, if any.
///
/// `/`, relative paths and protocol-relative `//host` (or `/\host`)
/// values yield `None`.
pub fn local_return_path(path: &str) -> Option<String> {
    let off_site = path.starts_with("//") || path.starts_with("/\\");
    if path.is_empty() || path == "/" || !path.starts_with('/') || off_site {
        None
    } else {
        Some(path.to_string())
    }
}

fn new_nonce() -> String {
    Uuid::new_v4().simple().to_string()
}
