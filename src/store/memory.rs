use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{TaskStore, UserStore};
use crate::error::AppError;
use crate::models::{Task, TaskInput, User};

#[derive(Default)]
struct Users {
    next_id: i32,
    by_email: HashMap<String, User>,
}

/// In-process store with the same uniqueness and ownership rules as [`super::PgStore`].
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Users>,
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        if users.by_email.contains_key(email) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key value violates unique constraint: email {}",
                email
            )));
        }

        users.next_id += 1;
        let user = User {
            id: users.next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.by_email.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.by_email.get(email).cloned())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let mut tasks: Vec<Task> = self
            .tasks
            .read()
            .await
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn create_task(&self, user_id: i32, input: TaskInput) -> Result<Task, AppError> {
        let task = Task::new(input, user_id);
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_task(&self, user_id: i32, id: Uuid) -> Result<Option<Task>, AppError> {
        Ok(self
            .tasks
            .read()
            .await
            .get(&id)
            .filter(|task| task.user_id == user_id)
            .cloned())
    }

    async fn update_task(
        &self,
        user_id: i32,
        id: Uuid,
        input: TaskInput,
    ) -> Result<Option<Task>, AppError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&id) {
            Some(task) if task.user_id == user_id => {
                task.apply(input);
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_task(&self, user_id: i32, id: Uuid) -> Result<bool, AppError> {
        let mut tasks = self.tasks.write().await;
        let owned = tasks.get(&id).map_or(false, |task| task.user_id == user_id);
        if owned {
            tasks.remove(&id);
        }
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: None,
            done: false,
        }
    }

    #[actix_rt::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        let first = store.create_user("a@b.com", "hash").await.unwrap();
        assert_eq!(first.id, 1);

        assert!(store.create_user("a@b.com", "other").await.is_err());
        let second = store.create_user("c@d.com", "hash").await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[actix_rt::test]
    async fn test_find_by_email() {
        let store = MemoryStore::new();
        store.create_user("a@b.com", "hash").await.unwrap();

        let found = store.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "hash");
        assert!(store.find_by_email("x@y.com").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_tasks_are_owner_scoped() {
        let store = MemoryStore::new();
        let task = store.create_task(1, input("mine")).await.unwrap();

        assert!(store.get_task(2, task.id).await.unwrap().is_none());
        assert!(store.update_task(2, task.id, input("stolen")).await.unwrap().is_none());
        assert!(!store.delete_task(2, task.id).await.unwrap());
        assert!(store.list_tasks(2).await.unwrap().is_empty());

        let updated = store
            .update_task(1, task.id, input("renamed"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert!(store.delete_task(1, task.id).await.unwrap());
        assert!(store.get_task(1, task.id).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        let older = store.create_task(1, input("older")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let newer = store.create_task(1, input("newer")).await.unwrap();

        let ids: Vec<Uuid> = store
            .list_tasks(1)
            .await
            .unwrap()
            .into_iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }
}
