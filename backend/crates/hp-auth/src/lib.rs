pub mod auth_gate;
pub mod claims;
pub mod error;
pub mod gate_decision;
pub mod gate_state;
pub mod identity_provider;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod oidc_identity_provider;
pub mod user_metadata;

pub use auth_gate::{AuthGate, local_return_path};
pub use claims::{DEFAULT_ORG_CLAIM_FALLBACK, IdentityClaims, PRIMARY_ORG_CLAIM};
pub use error::{AuthError, Result};
pub use gate_decision::GateDecision;
pub use gate_state::{GateState, GateStatus};
pub use identity_provider::IdentityProvider;
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use oidc_identity_provider::{OidcIdentityProvider, OidcSettings};
pub use user_metadata::{DEFAULT_METADATA_NAMESPACE, UserMetadata};

#[cfg(test)]
mod tests;
