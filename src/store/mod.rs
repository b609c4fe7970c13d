//! Persistence seams.
//!
//! Handlers talk to users and tasks only through these traits. [`PgStore`] backs the
//! running server; [`MemoryStore`] follows the same rules without a database.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskInput, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user. Fails if the email is already taken; callers do not pre-check.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

/// Task persistence. Every operation is scoped to `user_id`; a task owned by someone
/// else behaves exactly like a missing one.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists the user's tasks, newest first.
    async fn list_tasks(&self, user_id: i32) -> Result<Vec<Task>, AppError>;

    async fn create_task(&self, user_id: i32, input: TaskInput) -> Result<Task, AppError>;

    async fn get_task(&self, user_id: i32, id: Uuid) -> Result<Option<Task>, AppError>;

    async fn update_task(
        &self,
        user_id: i32,
        id: Uuid,
        input: TaskInput,
    ) -> Result<Option<Task>, AppError>;

    /// Returns `false` if nothing was deleted.
    async fn delete_task(&self, user_id: i32, id: Uuid) -> Result<bool, AppError>;
}
