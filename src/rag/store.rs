//! RagStore trait — abstract interface for the vector index.
//!
//! The primary implementation is `SqliteRagStore` in the `sqlite`
//! module. Entries are append-only: no update or delete operation is
//! exposed; the index lifecycle is tied to the persistence directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A stored chunk with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChunk {
    /// Unique chunk identifier.
    pub chunk_id: String,
    /// The text content of the chunk.
    pub content: String,
    /// Source identifier (filename, upload, etc.).
    pub source: String,
    /// Optional metadata (JSON).
    pub metadata: Option<serde_json::Value>,
}

/// Result of a similarity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkSearchResult {
    pub chunk: StoredChunk,
    /// Similarity score (higher = better).
    pub score: f32,
}

/// Abstract trait for vector index backends.
#[async_trait]
pub trait RagStore: Send + Sync {
    /// Insert chunks with their embedding vectors, committed before return.
    async fn insert_batch(&self, items: Vec<(StoredChunk, Vec<f32>)>) -> Result<(), ApiError>;

    /// Search for chunks similar to the query embedding.
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<ChunkSearchResult>, ApiError>;

    /// Get the total chunk count.
    async fn count(&self) -> Result<usize, ApiError>;
}
