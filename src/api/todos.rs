use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::parse_id;
use crate::error::AppError;
use crate::models::{Paginated, Todo, TodoInput};
use crate::services::ListTodosRequest;
use crate::state::AppState;

/// Raw query string of `GET /todos`. Values that fail to parse fall back to defaults
/// or are ignored as filters.
#[derive(Debug, Default, Deserialize)]
pub(super) struct TodoQueryParams {
    page: Option<String>,
    limit: Option<String>,
    search: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    completed: Option<String>,
    category_id: Option<String>,
    priority: Option<String>,
}

impl From<TodoQueryParams> for ListTodosRequest {
    fn from(params: TodoQueryParams) -> Self {
        ListTodosRequest {
            page: parse_or(params.page.as_deref(), 1),
            limit: parse_or(params.limit.as_deref(), 10),
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            completed: params.completed.as_deref().and_then(parse_bool),
            category_id: params
                .category_id
                .as_deref()
                .and_then(|raw| raw.parse::<u32>().ok())
                .map(i64::from),
            priority: params.priority.filter(|p| !p.is_empty()),
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or(0),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

pub(super) async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<TodoQueryParams>, QueryRejection>,
) -> Result<Json<Paginated<Todo>>, AppError> {
    let Query(params) = params?;
    let page = state.todos.get_todos(params.into()).await?;
    Ok(Json(page))
}

pub(super) async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = payload?;
    let todo = state.todos.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub(super) async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let todo = state.todos.get_todo_by_id(id).await?;
    Ok(Json(todo))
}

pub(super) async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let todo = state.todos.update_todo(id, input).await?;
    Ok(Json(todo))
}

pub(super) async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.todos.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn toggle_complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let todo = state.todos.toggle_complete(id).await?;
    Ok(Json(todo))
}
