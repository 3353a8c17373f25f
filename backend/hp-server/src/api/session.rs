//! Session state for the portal's client side.

use crate::{ApiResult, AppState, SessionCookie};

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use hp_session::{ApplyOutcome, SessionError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    /// Path currently displayed, to mark the active navigation entry
    pub path: Option<String>,
}

/// GET /api/session - current session snapshot
pub async fn session_snapshot(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
    Query(query): Query<SnapshotQuery>,
) -> ApiResult<Response> {
    let snapshot = match state.sessions.lookup(cookie).await {
        Some((_, session, _)) => session.lock().await.snapshot(query.path.as_deref()),
        None => state.sessions.detached().snapshot(query.path.as_deref()),
    };

    Ok(Json(snapshot).into_response())
}

/// POST /api/session/retry - fetch the tenant configuration again
pub async fn retry_tenant(
    State(state): State<AppState>,
    SessionCookie(cookie): SessionCookie,
) -> ApiResult<Response> {
    let Some((_, session, _)) = state.sessions.lookup(cookie).await else {
        return Err(SessionError::not_signed_in().into());
    };

    let (ticket, resolver) = {
        let session = session.lock().await;
        (session.retry_ticket()?, session.resolver())
    };

    let resolution = resolver.retry(&ticket.org_id).await;

    let mut session = session.lock().await;
    if session.apply_tenant(&ticket, resolution) == ApplyOutcome::Discarded {
        log::info!("Tenant retry finished after the session moved on");
    }

    Ok(Json(session.snapshot(None)).into_response())
}
