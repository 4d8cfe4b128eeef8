use std::sync::Arc;

use tracing::{debug, info};

use super::validate_name;
use crate::db::CategoryRepository;
use crate::error::AppError;
use crate::models::{Category, CategoryInput};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Name uniqueness is left to the database constraint.
    pub async fn create_category(&self, input: CategoryInput) -> Result<Category, AppError> {
        validate_category(&input)?;
        let category = self.repo.create(&input).await?;
        info!("created category {} ({})", category.id, category.name);
        Ok(category)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_category_by_id(&self, id: i64) -> Result<Category, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("category not found"))
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> Result<Category, AppError> {
        validate_category(&input)?;
        let category = self
            .repo
            .update(id, &input)
            .await?
            .ok_or(AppError::NotFound("category not found"))?;
        info!("updated category {}", id);
        Ok(category)
    }

    /// Todos pointing at the category keep existing with `category_id` cleared.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            info!("deleted category {}", id);
        } else {
            debug!("delete of missing category {} ignored", id);
        }
        Ok(())
    }
}

pub fn validate_category(input: &CategoryInput) -> Result<(), AppError> {
    validate_name("name", &input.name)?;
    if !is_hex_color(&input.color) {
        return Err(AppError::Validation(
            "color must be a valid hex color (e.g., #3B82F6)".to_string(),
        ));
    }
    Ok(())
}

/// `#RRGGBB`, hex digits in either case.
fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
