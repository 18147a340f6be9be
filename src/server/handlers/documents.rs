use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::core::errors::ApiError;
use crate::rag::StoredChunk;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentInput {
    pub text: String,
}

/// Chunk an uploaded document, embed the chunks, and persist them.
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DocumentInput>,
) -> Result<impl IntoResponse, ApiError> {
    let chunks = state.chunker.split(&input.text, "upload");
    let inserted = chunks.len();

    if !chunks.is_empty() {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = state.embedder.embed(&texts).await?;

        let items = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| {
                (
                    StoredChunk {
                        chunk_id: Uuid::new_v4().to_string(),
                        content: chunk.text,
                        source: chunk.source,
                        metadata: Some(json!({
                            "chunk_index": chunk.chunk_index,
                            "start_offset": chunk.start_offset,
                        })),
                    },
                    embedding,
                )
            })
            .collect();

        state.rag_store.insert_batch(items).await?;
    }

    Ok(Json(json!({
        "message": format!("{} chunks added to knowledge base.", inserted)
    })))
}
