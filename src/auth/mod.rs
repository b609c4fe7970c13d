pub mod cookie;
pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use cookie::{cleared_refresh_cookie, refresh_cookie, REFRESH_COOKIE_NAME};
pub use extractors::AuthenticatedUser;
pub use middleware::{authenticate, AuthMiddleware};
pub use password::PasswordHasher;
pub use token::{Claims, TokenError, TokenService};

/// Represents the payload for a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address for the new account; must be unique across users.
    #[validate(email)]
    pub email: String,
    /// Plaintext password. Only its bcrypt hash is stored.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Represents the payload for a login request.
///
/// Not validated beyond its JSON shape: a malformed email simply does not match any user.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by a successful login. The refresh token travels in a cookie instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body returned by a successful refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
