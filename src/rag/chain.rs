//! RAG chain: retrieve → prompt → LLM → answer.
//!
//! Fixed pipeline with no branching, re-ranking, or citation tracking.

use std::sync::Arc;

use super::embedder::Embedder;
use super::store::RagStore;
use crate::core::errors::ApiError;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

const PROMPT_TEMPLATE: &str = "\
You are a helpful assistant. Use the context below to answer the question.

Context:
{context}

Question:
{question}

Answer:";

pub struct RagChain {
    store: Arc<dyn RagStore>,
    embedder: Arc<dyn Embedder>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl RagChain {
    pub fn new(
        store: Arc<dyn RagStore>,
        embedder: Arc<dyn Embedder>,
        llm: Arc<dyn LlmProvider>,
        top_k: usize,
    ) -> Self {
        Self {
            store,
            embedder,
            llm,
            top_k,
        }
    }

    /// Answer a query against the stored index.
    pub async fn answer(&self, query: &str) -> Result<String, ApiError> {
        let inputs = [query.to_string()];
        let query_embedding = self
            .embedder
            .embed(&inputs)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Internal("No embedding returned for query".to_string()))?;

        let results = self.store.search(&query_embedding, self.top_k).await?;
        let context = results
            .iter()
            .map(|r| r.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = build_prompt(&context, query);
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        self.llm.chat(request).await
    }
}

fn build_prompt(context: &str, question: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
}
