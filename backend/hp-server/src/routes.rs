use crate::{AppState, api, health};

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

/// Build the gateway router.
///
/// `cors_origins` may call the `/api` routes with credentials; an empty list
/// allows no cross-origin access.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    let api_routes = Router::new()
        .route("/session", get(api::session::session_snapshot))
        .route("/session/retry", post(api::session::retry_tenant))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE])
                .allow_credentials(true),
        );

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Sign-in flow
        .route("/login", get(api::auth::login))
        .route("/callback", get(api::auth::callback))
        .route("/logout", get(api::auth::logout))
        .route("/signed-out", get(api::auth::signed_out))
        .nest("/api", api_routes)
        // Portal navigations
        .fallback(api::shell::shell)
        .with_state(state)
}
