use crate::CookieSettings;

use std::sync::Arc;

use hp_auth::IdentityProvider;
use hp_session::SessionStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub identity: Arc<dyn IdentityProvider>,
    pub cookie: CookieSettings,
    /// Where the provider sends the visitor after logout
    pub signed_out_url: String,
}
