use crate::{IdentityClaims, Result as AuthErrorResult};

use async_trait::async_trait;

/// The external identity provider, reduced to what the gateway needs.
///
/// Whether a visitor is authenticated or mid-login is tracked by the
/// session's [`AuthGate`](crate::AuthGate); the provider only starts and ends
/// the login flow and turns a completed login into claims.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL that starts the login flow. `state` comes back on the callback.
    fn login_url(&self, state: &str) -> String;

    /// Claims for the credential handed to the callback.
    async fn claims(&self, credential: &str) -> AuthErrorResult<IdentityClaims>;

    /// URL that ends the provider session and returns the browser to `return_to`.
    fn logout_url(&self, return_to: &str) -> String;
}
