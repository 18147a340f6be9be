use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "RAG chatbot is running 🚀" }))
}
