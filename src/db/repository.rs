use async_trait::async_trait;

use crate::models::{Category, CategoryInput, NewTodo, Todo, TodoQuery};

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn create(&self, todo: &NewTodo) -> Result<Todo, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, sqlx::Error>;
    /// Returns one page of matching todos together with the total match count.
    async fn list(&self, query: &TodoQuery) -> Result<(Vec<Todo>, i64), sqlx::Error>;
    /// Replaces every writable field. `None` when no todo has this id.
    async fn update(&self, id: i64, todo: &NewTodo) -> Result<Option<Todo>, sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
    /// Flips `completed` in a single statement and returns the row as this call left it.
    /// `None` when no todo has this id.
    async fn toggle_complete(&self, id: i64) -> Result<Option<Todo>, sqlx::Error>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &CategoryInput) -> Result<Category, sqlx::Error>;
    async fn find_all(&self) -> Result<Vec<Category>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;
    async fn update(&self, id: i64, category: &CategoryInput)
    -> Result<Option<Category>, sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}
