use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::core::errors::ApiError;
use crate::llm::{ChatMessage, ChatRequest};
use crate::rag::RagChain;
use crate::state::AppState;

/// Smoke test for the hosted LLM connection.
pub async fn test_groq(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = ChatRequest::new(vec![ChatMessage::user(
        "What is retrieval-augmented generation?",
    )]);
    let response = state.llm.chat(request).await?;
    Ok(Json(json!({ "response": response })))
}

#[derive(Debug, Deserialize)]
pub struct RagChatParams {
    pub user_query: String,
}

pub async fn rag_chat(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RagChatParams>,
) -> Result<impl IntoResponse, ApiError> {
    let chain = RagChain::new(
        state.rag_store.clone(),
        state.embedder.clone(),
        state.llm.clone(),
        state.config.top_k,
    );
    let answer = chain.answer(&params.user_query).await?;
    Ok(Json(json!({ "answer": answer })))
}
