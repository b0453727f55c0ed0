use axum::{response::Result, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// Liveness probe; touches no task state
pub async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "success": true,
        "message": "API is running",
        "timestamp": Utc::now()
    })))
}
