use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// An account as stored by the persistence layer.
///
/// `password_hash` is never serialized, so a `User` can be returned as-is.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
