pub mod category_service;
pub mod query;
pub mod todo_service;

pub use category_service::CategoryService;
pub use query::ListTodosRequest;
pub use todo_service::TodoService;

use crate::error::AppError;

pub(crate) const MAX_NAME_LEN: usize = 255;

/// Shared rule for todo titles and category names.
pub(crate) fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be less than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}
