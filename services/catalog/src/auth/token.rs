//! Identity token minting and verification.
//!
//! # Purpose
//! Defines the claim structure and the [`TokenService`] that signs and
//! verifies the time-limited tokens carried by mutating requests.
//!
//! # Architectural role
//! The service is constructor-injected wherever verification happens, so the
//! signing-key lifecycle stays explicit and tests can substitute their own
//! instance. There is deliberately no process-global verification utility.
//!
//! # Key invariants
//! - Tokens are HMAC-signed (HS256) with the process-wide shared secret.
//! - Every token carries the account id in `sub` and expires exactly one week
//!   after issuance.
//! - Verification is stateless; there is no revocation list.
//!
//! # Security boundary
//! Malformed and expired tokens are distinct error variants internally, but
//! both surface to clients as a single unauthenticated outcome.
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Lifetime of an issued token.
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Claims carried by catalog-issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account identifier the token was issued for.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and verifies signed identity tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a fresh token for an account.
    ///
    /// # Errors
    /// - `TokenError::Malformed` if encoding fails.
    pub fn issue(&self, account_id: &str) -> Result<String, TokenError> {
        let iat = now_epoch_seconds();
        let claims = TokenClaims {
            sub: account_id.to_string(),
            iat,
            exp: iat + TOKEN_TTL.as_secs() as i64,
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify a token and extract the account id it was issued for.
    ///
    /// # Errors
    /// - `TokenError::Expired` past the embedded expiry.
    /// - `TokenError::Malformed` for anything that fails to parse or
    ///   signature-check.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 5;
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)?;
        Ok(data.claims.sub)
    }
}

fn now_epoch_seconds() -> i64 {
    // If the clock is skewed before the epoch, clamp to zero to avoid panics.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_secs() as i64
}
