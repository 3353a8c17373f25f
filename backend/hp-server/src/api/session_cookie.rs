//! Binding of requests to visitor sessions via a cookie.

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use hp_session::SessionId;
use http::{HeaderValue, header::COOKIE};

/// Name and attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
}

impl CookieSettings {
    /// `Set-Cookie` value binding the browser to `id`.
    #[track_caller]
    pub fn set_cookie(&self, id: SessionId) -> Result<HeaderValue, ApiError> {
        let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", self.name, id);
        if self.secure {
            cookie.push_str("; Secure");
        }

        HeaderValue::from_str(&cookie).map_err(|e| ApiError::Internal {
            message: format!("Cannot encode session cookie: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Session id carried by the request, if any.
///
/// Missing, malformed or unknown ids are not an error; the handler creates a
/// new session instead.
pub struct SessionCookie(pub Option<SessionId>);

impl FromRequestParts<AppState> for SessionCookie {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let id = parts
                .headers
                .get_all(COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .find_map(|header| find_cookie(header, &state.cookie.name))
                .and_then(|raw| match SessionId::parse(raw) {
                    Ok(id) => Some(id),
                    Err(_) => {
                        log::debug!("Ignoring malformed session cookie");
                        None
                    }
                });

            Ok(SessionCookie(id))
        }
    }
}

/// Value of cookie `name` in a `Cookie` header.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value.trim())
    })
}
