//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `Chunker`: splits raw text into overlapping fixed-size chunks
//! - `Embedder`/`HttpEmbedder`: turns chunks into vectors
//! - `RagStore`/`SqliteRagStore`: the persisted vector index
//! - `RagChain`: retrieve → prompt → LLM pipeline

pub mod chain;
pub mod chunker;
pub mod embedder;
pub mod sqlite;
pub mod store;

pub use chain::RagChain;
pub use chunker::{Chunker, TextChunk};
pub use embedder::{Embedder, HttpEmbedder};
pub use sqlite::SqliteRagStore;
pub use store::{ChunkSearchResult, RagStore, StoredChunk};
