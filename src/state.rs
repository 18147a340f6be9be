use std::sync::Arc;

use anyhow::Context;

use crate::core::config::{AppConfig, AppPaths};
use crate::llm::{GroqProvider, LlmProvider};
use crate::rag::{Chunker, Embedder, HttpEmbedder, RagStore, SqliteRagStore};

/// Global application state shared across all routes.
///
/// Contains the configuration, the persisted vector index, and the
/// embedding/LLM adapters.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub config: AppConfig,
    pub llm: Arc<dyn LlmProvider>,
    pub embedder: Arc<dyn Embedder>,
    pub rag_store: Arc<dyn RagStore>,
    pub chunker: Chunker,
}

impl AppState {
    /// Initializes the application state.
    ///
    /// Sets up paths, loads configuration from the environment, and
    /// opens the vector index inside the persistence directory.
    pub async fn initialize() -> anyhow::Result<Arc<Self>> {
        let paths = Arc::new(AppPaths::new());
        let config = AppConfig::from_env();

        if config.groq_api_key.is_empty() {
            tracing::warn!("GROQ_API_KEY is not set; chat endpoints will fail");
        }

        let rag_store: Arc<dyn RagStore> = Arc::new(
            SqliteRagStore::open(&paths.persist_dir)
                .await
                .context("Failed to open vector index")?,
        );

        let llm: Arc<dyn LlmProvider> = Arc::new(GroqProvider::from_config(&config));
        let embedder: Arc<dyn Embedder> = Arc::new(HttpEmbedder::from_config(&config));
        let chunker = Chunker::new(config.chunk_size, config.chunk_overlap);

        Ok(Arc::new(AppState {
            paths,
            config,
            llm,
            embedder,
            rag_store,
            chunker,
        }))
    }
}
