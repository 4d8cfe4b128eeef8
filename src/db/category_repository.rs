use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::repository::CategoryRepository;
use super::timestamp;
use crate::models::{Category, CategoryInput};

pub struct SqliteCategoryRepository {
    db: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: &CategoryInput) -> Result<Category, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query("INSERT INTO categories (name, color, created_at) VALUES (?, ?, ?)")
            .bind(&category.name)
            .bind(&category.color)
            .bind(timestamp(&now))
            .execute(&self.db)
            .await?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn find_all(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, color, created_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, color, created_at FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn update(
        &self,
        id: i64,
        category: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let result = sqlx::query("UPDATE categories SET name = ?, color = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.color)
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
