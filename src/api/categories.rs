use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::parse_id;
use crate::error::AppError;
use crate::models::{Category, CategoryInput};
use crate::state::AppState;

pub(super) async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.categories.get_categories().await?;
    Ok(Json(categories))
}

pub(super) async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let Json(input) = payload?;
    let category = state.categories.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub(super) async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    let id = parse_id(&id)?;
    let category = state.categories.get_category_by_id(id).await?;
    Ok(Json(category))
}

pub(super) async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<Json<Category>, AppError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let category = state.categories.update_category(id, input).await?;
    Ok(Json(category))
}

pub(super) async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.categories.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
