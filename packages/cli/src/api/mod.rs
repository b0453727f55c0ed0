use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;

pub mod health;

use taskdeck_tasks::api::{create_tasks_router, TasksState};

/// Creates the server router with a fresh task store
pub fn create_router() -> Router {
    create_router_with_state(TasksState::new())
}

/// Creates the server router over the given task store state
pub fn create_router_with_state(state: TasksState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/tasks", create_tasks_router().with_state(state))
        .fallback(endpoint_not_found)
}

/// JSON 404 for paths no route matches
async fn endpoint_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found"
        })),
    )
}
