//! Every path not claimed by a dedicated route is a portal navigation.

use crate::{ApiResult, AppState, SessionCookie};

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header::LOCATION, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use hp_core::{UseCase, is_root};
use hp_session::ShellView;

/// GET /{*path} - resolve a navigation against the visitor's session
pub async fn shell(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    uri: Uri,
) -> ApiResult<Response> {
    let path = uri.path();
    let (id, session, created) = match state.sessions.lookup(cookie).await {
        Some(existing) => existing,
        // Nothing worth a session: the path is not part of the portal
        None if !is_portal_path(path) => {
            return Ok(render_view(
                &state,
                ShellView::NotFound {
                    path: path.to_string(),
                },
            ));
        }
        None => state.sessions.get_or_create(None).await,
    };
    let view = session.lock().await.visit(path);

    let mut response = render_view(&state, view);
    if created {
        response
            .headers_mut()
            .insert(SET_COOKIE, state.cookie.set_cookie(id)?);
    }

    Ok(response)
}

/// HTTP rendition of a shell view.
///
/// Navigations that leave the current path answer 302 with a `Location`;
/// everything else carries the view as JSON under a status matching it.
pub fn render_view(state: &AppState, view: ShellView) -> Response {
    let location = match &view {
        ShellView::StartLogin { nonce } => Some(state.identity.login_url(nonce)),
        ShellView::Redirect { to } => Some(to.clone()),
        ShellView::External { url, .. } => Some(url.clone()),
        _ => None,
    };

    if let Some(location) = location {
        return redirect(&location, Json(view));
    }

    let status = match &view {
        ShellView::Loading => StatusCode::ACCEPTED,
        ShellView::Error { .. } => StatusCode::UNAUTHORIZED,
        ShellView::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    (status, Json(view)).into_response()
}

/// 302 to `location` with `body`.
pub fn redirect(location: &str, body: impl IntoResponse) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(LOCATION, value)], body).into_response(),
        Err(e) => {
            log::error!("Cannot redirect to '{location}': {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn is_portal_path(path: &str) -> bool {
    is_root(path) || UseCase::from_path(path).is_some()
}
