use std::sync::Arc;

use crate::auth::{PasswordHasher, TokenService};
use crate::config::Config;
use crate::store::{TaskStore, UserStore};

/// Everything a handler needs, shared across workers through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        tasks: Arc<dyn TaskStore>,
        tokens: TokenService,
        passwords: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tasks,
            tokens,
            passwords,
            cookie_secure: false,
        }
    }

    /// Wires one store implementation for both users and tasks, with settings from `config`.
    pub fn from_config<S>(store: Arc<S>, config: &Config) -> Self
    where
        S: UserStore + TaskStore + 'static,
    {
        Self {
            users: store.clone(),
            tasks: store,
            tokens: TokenService::new(config.jwt_secret.as_bytes()),
            passwords: PasswordHasher::new(config.bcrypt_cost),
            cookie_secure: config.cookie_secure,
        }
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }
}
