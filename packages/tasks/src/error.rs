use thiserror::Error;

use crate::validator::ValidationError;

/// Errors surfaced by task operations
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound,
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
