use std::sync::Arc;

use tracing::{debug, info};

use super::{ListTodosRequest, validate_name};
use crate::db::TodoRepository;
use crate::error::AppError;
use crate::models::{NewTodo, Paginated, Pagination, Priority, Todo, TodoInput};

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_todo(&self, input: TodoInput) -> Result<Todo, AppError> {
        let todo = validate_todo(input)?;
        let created = self.repo.create(&todo).await?;
        info!("created todo {}", created.id);
        Ok(created)
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<Todo, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("todo not found"))
    }

    pub async fn get_todos(&self, request: ListTodosRequest) -> Result<Paginated<Todo>, AppError> {
        let query = request.normalize();
        debug!("listing todos with {:?}", query);

        let (data, total) = self.repo.list(&query).await?;
        Ok(Paginated {
            data,
            pagination: Pagination::new(query.page, query.limit, total),
        })
    }

    pub async fn update_todo(&self, id: i64, input: TodoInput) -> Result<Todo, AppError> {
        let todo = validate_todo(input)?;
        let updated = self
            .repo
            .update(id, &todo)
            .await?
            .ok_or(AppError::NotFound("todo not found"))?;
        info!("updated todo {}", id);
        Ok(updated)
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_todo(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            info!("deleted todo {}", id);
        } else {
            debug!("delete of missing todo {} ignored", id);
        }
        Ok(())
    }

    pub async fn toggle_complete(&self, id: i64) -> Result<Todo, AppError> {
        let todo = self
            .repo
            .toggle_complete(id)
            .await?
            .ok_or(AppError::NotFound("todo not found"))?;
        info!("todo {} completed = {}", id, todo.completed);
        Ok(todo)
    }
}

pub fn validate_todo(input: TodoInput) -> Result<NewTodo, AppError> {
    validate_name("title", &input.title)?;

    let priority = match input.priority.as_deref() {
        None | Some("") => Priority::default(),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Validation("invalid priority value".to_string()))?,
    };

    Ok(NewTodo {
        title: input.title,
        description: input.description,
        completed: input.completed,
        category_id: input.category_id,
        priority,
        due_date: input.due_date,
    })
}
