use crate::{AuthError, IdentityClaims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance applied to `exp` and `nbf`.
const LEEWAY_SECS: u64 = 30;

/// Validates ID tokens issued by the identity provider.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Self::base_validation(Algorithm::HS256),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create validator with RS256 (asymmetric public key)
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key =
            DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
                AuthError::InvalidToken {
                    message: format!("Invalid RSA public key: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(Self {
            decoding_key,
            validation: Self::base_validation(Algorithm::RS256),
            algorithm: Algorithm::RS256,
        })
    }

    #[track_caller]
    pub fn from_algorithm(algorithm: &JwtAlgorithm) -> AuthErrorResult<Self> {
        match algorithm {
            JwtAlgorithm::HS256 { secret } => Ok(Self::with_hs256(secret)),
            JwtAlgorithm::RS256 { public_key_pem } => Self::with_rs256(public_key_pem),
        }
    }

    /// Require the `iss` claim to match.
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Require the `aud` claim to contain the client id.
    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    fn base_validation(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        // ID tokens always carry `aud`; only checked when an audience is configured
        validation.validate_aud = false;
        validation
    }

    /// Validate an ID token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<IdentityClaims> {
        let token_data = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
