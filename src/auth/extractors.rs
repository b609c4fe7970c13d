use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The identity of a request that passed the auth gate.
///
/// `AuthMiddleware` inserts this into request extensions after verifying the access token.
/// Handlers take it as an argument; if the gate did not run, extraction fails with
/// `AppError::Unauthorized` rather than yielding a default id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub i32);

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().copied() {
            Some(user) => ready(Ok(user)),
            None => {
                log::error!(
                    "No authenticated user on {}; is AuthMiddleware applied to this route?",
                    req.path()
                );
                ready(Err(AppError::Unauthorized("Unauthorized".to_string()).into()))
            }
        }
    }
}
