// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Handles CRUD operations against the in-memory task store

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::response::ApiResponse;
use crate::error::TaskError;
use crate::store::TaskStore;
use crate::types::{TaskCreateInput, TaskUpdateInput};
use crate::validator::validate_title;

/// Shared handler state.
///
/// One lock guards both the collection and the id counter, so every request's
/// read-validate-write sequence is atomic with respect to the others.
#[derive(Clone)]
pub struct TasksState {
    store: Arc<RwLock<TaskStore>>,
}

impl TasksState {
    pub fn new() -> Self {
        TasksState {
            store: Arc::new(RwLock::new(TaskStore::new())),
        }
    }
}

impl Default for TasksState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body for creating a task
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Request body for updating a task; absent fields are left unchanged
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// List all tasks
pub async fn list_tasks(State(state): State<TasksState>) -> impl IntoResponse {
    let tasks = state.store.read().await.list();

    info!("Retrieved {} tasks", tasks.len());
    let count = tasks.len();
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success_with_count(tasks, count)),
    )
        .into_response()
}

/// Get a specific task by id
pub async fn get_task(
    State(state): State<TasksState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Getting task with ID: {}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.store.read().await.get(id) {
        Some(task) => (StatusCode::OK, ResponseJson(ApiResponse::success(task))).into_response(),
        None => {
            info!("Task not found: {}", id);
            TaskError::NotFound.into_response()
        }
    }
}

/// Create a new task
pub async fn create_task(
    State(state): State<TasksState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!("Rejected create body: {}", rejection.body_text());
            return TaskError::InvalidBody(rejection.body_text()).into_response();
        }
    };

    let errors = validate_title(request.title.as_deref());
    if !errors.is_empty() {
        info!("Task creation failed validation");
        return TaskError::Validation(errors).into_response();
    }

    let input = TaskCreateInput {
        title: request.title.unwrap_or_default().trim().to_string(),
        description: request.description.unwrap_or_default().trim().to_string(),
        completed: request.completed.unwrap_or(false),
    };

    let task = state.store.write().await.insert(input);

    info!("Created task: {} (ID: {})", task.title, task.id);
    (
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(task)),
    )
        .into_response()
}

/// Update an existing task
pub async fn update_task(
    State(state): State<TasksState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("Updating task: {}", id);

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!("Rejected update body: {}", rejection.body_text());
            return TaskError::InvalidBody(rejection.body_text()).into_response();
        }
    };

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    let mut store = state.store.write().await;

    if store.get(id).is_none() {
        info!("Task not found for update: {}", id);
        return TaskError::NotFound.into_response();
    }

    // Validation failure applies no change at all, the timestamp included
    if request.title.is_some() {
        let errors = validate_title(request.title.as_deref());
        if !errors.is_empty() {
            info!("Task update failed validation: {}", id);
            return TaskError::Validation(errors).into_response();
        }
    }

    let input = TaskUpdateInput {
        title: request.title.map(|t| t.trim().to_string()),
        description: request.description.map(|d| d.trim().to_string()),
        completed: request.completed,
    };

    match store.apply_update(id, input) {
        Some(task) => {
            info!("Updated task: {} (ID: {})", task.title, task.id);
            (StatusCode::OK, ResponseJson(ApiResponse::success(task))).into_response()
        }
        None => TaskError::NotFound.into_response(),
    }
}

/// Delete a task
pub async fn delete_task(
    State(state): State<TasksState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting task: {}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.store.write().await.remove(id) {
        Some(task) => {
            info!("Deleted task: {} (ID: {})", task.title, task.id);
            (
                StatusCode::OK,
                ResponseJson(ApiResponse::success_with_message(
                    task,
                    "Task deleted successfully",
                )),
            )
                .into_response()
        }
        None => {
            info!("Task not found for deletion: {}", id);
            TaskError::NotFound.into_response()
        }
    }
}

/// Parse a path id segment; a non-numeric segment never matches a task
fn parse_id(raw: &str) -> Result<u64, TaskError> {
    raw.parse::<u64>().map_err(|_| TaskError::NotFound)
}
