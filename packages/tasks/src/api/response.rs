// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use crate::error::TaskError;
use crate::validator::ValidationError;

/// Standard API response wrapper
///
/// Optional members are skipped during serialization so each endpoint emits
/// exactly its documented shape.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
            errors: None,
        }
    }

    pub fn success_with_count(data: T, count: usize) -> Self {
        ApiResponse {
            count: Some(count),
            ..ApiResponse::success(data)
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            message: Some(message.into()),
            ..ApiResponse::success(data)
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            count: None,
            message: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn validation(errors: Vec<ValidationError>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            count: None,
            message: None,
            error: None,
            errors: Some(errors),
        }
    }
}

/// Convert task errors to HTTP responses
impl IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        match self {
            TaskError::NotFound => (
                StatusCode::NOT_FOUND,
                ResponseJson(ApiResponse::<()>::error("Task not found")),
            )
                .into_response(),
            TaskError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ResponseJson(ApiResponse::<()>::validation(errors)),
            )
                .into_response(),
            TaskError::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                ResponseJson(ApiResponse::<()>::validation(vec![ValidationError::new(
                    "body", message,
                )])),
            )
                .into_response(),
        }
    }
}
