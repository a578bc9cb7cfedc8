use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::utils::time;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "time": time::now(),
    });
    (StatusCode::OK, Json(body))
}
