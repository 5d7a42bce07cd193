use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({ "Hello": "World" }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
