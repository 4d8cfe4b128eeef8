mod categories;
mod todos;

use axum::routing::{get, patch};
use axum::{Json, Router, extract::State};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/todos/{id}/complete", patch(todos::toggle_complete))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    }))
}

/// Ids are unsigned 32-bit on the wire; anything else is rejected before reaching a service.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<u32>()
        .map(i64::from)
        .map_err(|_| AppError::BadRequest("invalid id".to_string()))
}
