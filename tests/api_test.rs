mod common;

use axum::Router;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use todo_api::api::router;
use todo_api::state::AppState;
use tower::ServiceExt;

use common::test_pool;

async fn app() -> Router {
    router(AppState::new(test_pool().await))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn send(app: &Router, req: Request<String>) -> axum::response::Response {
    app.clone().oneshot(req).await.unwrap()
}

// --- health ---

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;

    let resp = send(&app, request("GET", "/health")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

// --- todos ---

#[tokio::test]
async fn create_todo_returns_201_with_defaults() {
    let app = app().await;

    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"Buy milk"}"#)).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["completed"], false);
    assert_eq!(body["priority"], "medium");
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn create_todo_with_malformed_json_returns_400() {
    let app = app().await;

    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"#)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_todo_with_invalid_fields_returns_400() {
    let app = app().await;

    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"   "}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "title is required");

    let resp = send(
        &app,
        json_request("POST", "/api/todos", r#"{"title":"x","priority":"urgent"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "invalid priority value");
}

#[tokio::test]
async fn get_todo_handles_bad_and_missing_ids() {
    let app = app().await;

    let resp = send(&app, request("GET", "/api/todos/abc")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "invalid id");

    let resp = send(&app, request("GET", "/api/todos/999")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "todo not found");
}

#[tokio::test]
async fn list_todos_returns_data_and_pagination() {
    let app = app().await;
    for title in ["First Todo", "Second Todo", "Third Todo"] {
        let body = json!({ "title": title }).to_string();
        let resp = send(&app, json_request("POST", "/api/todos", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(
        &app,
        request("GET", "/api/todos?page=1&limit=2&sort_by=title&sort_order=asc"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["title"], "First Todo");
    assert_eq!(
        body["pagination"],
        json!({ "current_page": 1, "per_page": 2, "total": 3, "total_pages": 2 })
    );
}

#[tokio::test]
async fn list_todos_tolerates_garbage_parameters() {
    let app = app().await;
    send(&app, json_request("POST", "/api/todos", r#"{"title":"Only"}"#)).await;

    let resp = send(
        &app,
        request(
            "GET",
            "/api/todos?page=x&limit=1000&sort_by=evil&sort_order=sideways&completed=maybe&priority=urgent",
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["pagination"]["current_page"], 1);
    assert_eq!(body["pagination"]["per_page"], 10);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn list_todos_embeds_category() {
    let app = app().await;
    let resp = send(
        &app,
        json_request("POST", "/api/categories", r##"{"name":"Work","color":"#3B82F6"}"##),
    )
    .await;
    let category_id = body_json(resp).await["id"].as_i64().unwrap();
    let body = json!({ "title": "Report", "category_id": category_id }).to_string();
    send(&app, json_request("POST", "/api/todos", &body)).await;
    send(&app, json_request("POST", "/api/todos", r#"{"title":"Loose"}"#)).await;

    let uri = format!("/api/todos?category_id={category_id}");
    let body = body_json(send(&app, request("GET", &uri)).await).await;

    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["category"]["name"], "Work");
    assert_eq!(body["data"][0]["category"]["color"], "#3B82F6");
}

#[tokio::test]
async fn update_todo_replaces_and_reports_missing() {
    let app = app().await;
    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"Draft"}"#)).await;
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            r#"{"title":"Final","priority":"high","due_date":"2030-01-02T03:04:05Z"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["title"], "Final");
    assert_eq!(body["priority"], "high");
    assert_eq!(body["due_date"], "2030-01-02T03:04:05Z");

    let resp = send(&app, json_request("PUT", "/api/todos/999", r#"{"title":"Ghost"}"#)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, json_request("PUT", "/api/todos/x", r#"{"title":"Bad"}"#)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggle_complete_returns_updated_todo() {
    let app = app().await;
    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"Flip"}"#)).await;
    let id = body_json(resp).await["id"].as_i64().unwrap();
    let uri = format!("/api/todos/{id}/complete");

    let resp = send(&app, request("PATCH", &uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["completed"], true);

    let resp = send(&app, request("PATCH", &uri)).await;
    assert_eq!(body_json(resp).await["completed"], false);

    let resp = send(&app, request("PATCH", "/api/todos/999/complete")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_returns_204() {
    let app = app().await;
    let resp = send(&app, json_request("POST", "/api/todos", r#"{"title":"Bye"}"#)).await;
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = send(&app, request("DELETE", &format!("/api/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, request("GET", &format!("/api/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, request("DELETE", "/api/todos/nope")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- categories ---

#[tokio::test]
async fn category_crud_round_trip() {
    let app = app().await;

    let resp = send(
        &app,
        json_request("POST", "/api/categories", r##"{"name":"Home","color":"#10B981"}"##),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await["id"].as_i64().unwrap();
    let uri = format!("/api/categories/{id}");

    let resp = send(&app, request("GET", "/api/categories")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);

    let resp = send(
        &app,
        json_request("PUT", &uri, r##"{"name":"House","color":"#10b981"}"##),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["name"], "House");

    let resp = send(&app, request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, request("GET", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "category not found");
}

#[tokio::test]
async fn create_category_with_bad_color_returns_400() {
    let app = app().await;

    let resp = send(
        &app,
        json_request("POST", "/api/categories", r#"{"name":"Work","color":"blue"}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let message = body_json(resp).await["message"].as_str().unwrap().to_string();
    assert!(message.contains("valid hex color"));
}

#[tokio::test]
async fn duplicate_category_name_returns_500() {
    let app = app().await;
    let body = r##"{"name":"Work","color":"#3B82F6"}"##;
    send(&app, json_request("POST", "/api/categories", body)).await;

    let resp = send(&app, json_request("POST", "/api/categories", body)).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["message"], "Database error occurred");
}
