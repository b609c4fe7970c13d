use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Lifetime of an access token.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;
/// Lifetime of a refresh token.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Represents the claims encoded within a JWT (JSON Web Token).
///
/// Access and refresh tokens share this shape and differ only in their lifetime.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token, the user's unique identifier.
    pub sub: i32,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Reasons a token could not be issued or accepted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, wrong algorithm or a signature that does not verify.
    #[error("invalid token")]
    Invalid,
    /// Well-formed and correctly signed, but past its expiry.
    #[error("expired token")]
    Expired,
    /// The signing step itself failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies HS256-signed access and refresh tokens.
///
/// The signing key is injected at construction; nothing is read from the environment here.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates a service with the standard lifetimes (30 minutes / 7 days).
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttls(
            secret,
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            Duration::days(REFRESH_TOKEN_TTL_DAYS),
        )
    }

    pub fn with_ttls(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Issues a short-lived access token for `user_id`.
    pub fn issue_access(&self, user_id: i32) -> Result<String, TokenError> {
        self.issue(user_id, self.access_ttl)
    }

    /// Issues a long-lived refresh token for `user_id`.
    pub fn issue_refresh(&self, user_id: i32) -> Result<String, TokenError> {
        self.issue(user_id, self.refresh_ttl)
    }

    fn issue(&self, user_id: i32, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + ttl.num_seconds(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            log::error!("Failed to sign token for user {}: {}", user_id, e);
            TokenError::Signing(e.to_string())
        })
    }

    /// Verifies a compact token string and returns its claims.
    ///
    /// A token is accepted only if its signature verifies against this service's key and
    /// its `exp` is strictly after the current time. Expiry is reported as
    /// [`TokenError::Expired`]; every other failure is [`TokenError::Invalid`].
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        // jsonwebtoken accepts exp == now; the boundary itself counts as expired here.
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
