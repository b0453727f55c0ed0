//! Error-handling middleware for the HTTP server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Create a panic handler that returns consistent error responses
pub fn create_panic_handler(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic)
}

/// Handle panic with server-side logging and a sanitized response
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    // Extract panic message safely
    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic occurred"
    };

    error!(panic_message = %panic_message, "Server panic occurred");

    // The fault stays server-side; the client gets a generic message
    let error_response = json!({
        "success": false,
        "error": "Internal server error"
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
}
