mod api;

use crate::{AppState, CookieSettings};

use hp_auth::{AuthError, IdentityClaims, IdentityProvider};
use hp_session::{SessionSettings, SessionStore};
use hp_tenant::TenantApiClient;

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Provider with fixed URLs that rejects every credential.
struct StubProvider;

#[async_trait]
impl IdentityProvider for StubProvider {
    fn login_url(&self, state: &str) -> String {
        format!("https://idp.test/authorize?state={state}")
    }

    async fn claims(&self, _credential: &str) -> hp_auth::Result<IdentityClaims> {
        Err(AuthError::InvalidToken {
            message: "stub".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn logout_url(&self, return_to: &str) -> String {
        format!("https://idp.test/logout?returnTo={return_to}")
    }
}

pub(crate) fn test_state(secure: bool) -> AppState {
    // Never contacted by these tests
    let client = TenantApiClient::new("http://127.0.0.1:9").expect("valid URL");

    AppState {
        sessions: SessionStore::new(SessionSettings::default(), Arc::new(client), 10),
        identity: Arc::new(StubProvider),
        cookie: CookieSettings {
            name: "hp_session".to_string(),
            secure,
        },
        signed_out_url: "http://portal.test/signed-out".to_string(),
    }
}
