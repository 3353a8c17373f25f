//! Sign-in and sign-out endpoints.

use crate::api::error::public_message;
use crate::api::shell::{redirect, render_view};
use crate::{ApiResult, AppState, SessionCookie};

use axum::{
    Json,
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use hp_core::ROOT_PATH;
use hp_session::ShellView;
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;

const MISSING_TOKEN_MESSAGE: &str = "The identity provider did not return a sign-in token.";
const SESSION_EXPIRED_MESSAGE: &str = "Your sign-in session has expired. Please sign in again.";

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub return_to: Option<String>,
}

/// Provider redirect back to the portal.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id_token: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// GET /login - send the visitor to the identity provider
pub async fn login(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Query(query): Query<LoginQuery>,
) -> ApiResult<Response> {
    let (id, session, created) = state.sessions.get_or_create(cookie).await;
    let return_to = query.return_to.as_deref().unwrap_or(ROOT_PATH);

    let location = {
        let mut session = session.lock().await;
        if session.gate().is_authenticated() {
            session.destination_for(return_to)
        } else {
            let nonce = session.begin_login(return_to)?;
            state.identity.login_url(&nonce)
        }
    };

    let mut response = redirect(&location, ());
    if created {
        response
            .headers_mut()
            .insert(SET_COOKIE, state.cookie.set_cookie(id)?);
    }
    Ok(response)
}

/// GET /callback - finish sign-in, resolve the tenant, land the visitor
///
/// The tenant fetch is awaited outside the session lock and applied only if
/// the session is still in the epoch it was issued under.
pub async fn callback(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Query(query): Query<CallbackQuery>,
) -> ApiResult<Response> {
    let Some((_, session, _)) = state.sessions.lookup(cookie).await else {
        warn!("Sign-in callback without a session");
        return Ok(render_view(
            &state,
            ShellView::Error {
                message: SESSION_EXPIRED_MESSAGE.to_string(),
            },
        ));
    };

    if let Some(error) = query.error {
        let message = query.error_description.unwrap_or(error);
        return Ok(fail(&state, &session, message).await);
    }

    let Some(token) = query.id_token else {
        return Ok(fail(&state, &session, MISSING_TOKEN_MESSAGE).await);
    };

    let claims = match state.identity.claims(&token).await {
        Ok(claims) => claims,
        Err(e) => {
            warn!("Sign-in token rejected: {e}");
            return Ok(fail(&state, &session, public_message(&e)).await);
        }
    };

    let nonce = query.state.unwrap_or_default();
    let (ticket, resolver) = {
        let mut session = session.lock().await;
        let ticket = session.complete_login(&nonce, claims)?;
        (ticket, session.resolver())
    };

    let resolution = resolver.resolve(&ticket.org_id).await;

    let landing = {
        let mut session = session.lock().await;
        session.apply_tenant(&ticket, resolution);
        session.landing_path()
    };

    info!("Sign-in complete, landing on {landing}");
    Ok(redirect(&landing, ()))
}

/// GET /logout - end the session and sign out at the provider
pub async fn logout(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> Response {
    if let Some(id) = cookie
        && let Some(session) = state.sessions.get(id).await
    {
        session.lock().await.logout();
    }

    redirect(&state.identity.logout_url(&state.signed_out_url), ())
}

/// GET /signed-out - public landing page after logout
pub async fn signed_out() -> Response {
    Json(json!({
        "view": "signed_out",
        "login": "/login",
    }))
    .into_response()
}

async fn fail(
    state: &AppState,
    session: &hp_session::SharedSession,
    message: impl Into<String>,
) -> Response {
    let message = message.into();
    session.lock().await.fail_login(message.clone());
    render_view(state, ShellView::Error { message })
}
