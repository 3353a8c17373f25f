use crate::{AuthError, IdentityClaims, IdentityProvider, JwtValidator, Result as AuthErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use url::Url;

const DEFAULT_SCOPE: &str = "openid profile email";

/// Endpoints and client registration for an OpenID Connect provider.
#[derive(Debug, Clone)]
pub struct OidcSettings {
    pub authorize_url: String,
    pub logout_url: String,
    pub client_id: String,
    pub redirect_uri: String,
}

/// Identity provider speaking the OIDC implicit flow: the callback receives
/// an ID token, which is validated locally.
pub struct OidcIdentityProvider {
    authorize_url: Url,
    logout_url: Url,
    client_id: String,
    redirect_uri: String,
    validator: JwtValidator,
}

impl OidcIdentityProvider {
    #[track_caller]
    pub fn new(settings: OidcSettings, validator: JwtValidator) -> AuthErrorResult<Self> {
        Ok(Self {
            authorize_url: parse_url("authorize_url", &settings.authorize_url)?,
            logout_url: parse_url("logout_url", &settings.logout_url)?,
            client_id: settings.client_id,
            redirect_uri: settings.redirect_uri,
            validator,
        })
    }
}

#[async_trait]
impl IdentityProvider for OidcIdentityProvider {
    fn login_url(&self, state: &str) -> String {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "id_token")
            .append_pair("response_mode", "query")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", DEFAULT_SCOPE)
            .append_pair("state", state)
            .append_pair("nonce", state);
        url.to_string()
    }

    async fn claims(&self, credential: &str) -> AuthErrorResult<IdentityClaims> {
        self.validator.validate(credential)
    }

    fn logout_url(&self, return_to: &str) -> String {
        let mut url = self.logout_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", return_to);
        url.to_string()
    }
}

#[track_caller]
fn parse_url(name: &str, value: &str) -> AuthErrorResult<Url> {
    Url::parse(value).map_err(|e| AuthError::Provider {
        message: format!("{name} '{value}' is not a valid URL: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
