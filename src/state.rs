use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::{SqliteCategoryRepository, SqliteTodoRepository};
use crate::services::{CategoryService, TodoService};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub todos: TodoService,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let todos = TodoService::new(Arc::new(SqliteTodoRepository::new(db.clone())));
        let categories =
            CategoryService::new(Arc::new(SqliteCategoryRepository::new(db.clone())));
        Self {
            db,
            todos,
            categories,
        }
    }
}
