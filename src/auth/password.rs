use crate::error::AppError;

/// Salted bcrypt hashing with an injected cost factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// The cost is not checked here; `hash` fails if bcrypt rejects it.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            log::error!("Failed to hash password: {}", e);
            AppError::InternalServerError("Error hashing password".into())
        })
    }

    /// Returns `false` on mismatch and on a secret bcrypt cannot parse.
    pub fn verify(&self, password: &str, secret: &str) -> bool {
        match bcrypt::verify(password, secret) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("Stored password hash could not be checked: {}", e);
                false
            }
        }
    }
}
