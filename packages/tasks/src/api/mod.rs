use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod handlers;
pub mod response;

pub use handlers::TasksState;

/// Creates the tasks API router
pub fn create_tasks_router() -> Router<TasksState> {
    Router::new()
        .route("/", get(handlers::list_tasks))
        .route("/", post(handlers::create_task))
        .route("/{id}", get(handlers::get_task))
        .route("/{id}", put(handlers::update_task))
        .route("/{id}", delete(handlers::delete_task))
}
