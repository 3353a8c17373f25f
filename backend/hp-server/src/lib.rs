pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{callback, login, logout, signed_out},
    error::{ApiError, Result as ApiResult},
    session::{retry_tenant, session_snapshot},
    session_cookie::{CookieSettings, SessionCookie},
    shell::{render_view, shell},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
