//! Sentence-embedding adapter.
//!
//! Wraps an OpenAI-compatible `/v1/embeddings` endpoint serving a
//! sentence-embedding model (default `all-MiniLM-L6-v2`).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::core::config::AppConfig;
use crate::core::errors::ApiError;

#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, one vector per input, in input order.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ApiError>;
}

#[derive(Clone)]
pub struct HttpEmbedder {
    base_url: String,
    model: String,
    client: Client,
}

impl HttpEmbedder {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.embedding_base_url.clone(),
            config.embedding_model.clone(),
        )
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ApiError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/embeddings", self.base_url);
        let body = json!({
            "model": self.model,
            "input": texts,
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::internal)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Internal(format!("Embedding error: {}", text)));
        }

        let payload: Value = res.json().await.map_err(ApiError::internal)?;

        let mut embeddings = Vec::new();
        if let Some(data) = payload["data"].as_array() {
            for item in data {
                if let Some(vals) = item["embedding"].as_array() {
                    let vec: Vec<f32> = vals
                        .iter()
                        .filter_map(|v| v.as_f64().map(|f| f as f32))
                        .collect();
                    embeddings.push(vec);
                }
            }
        }

        if embeddings.len() != texts.len() {
            return Err(ApiError::Internal(format!(
                "Embedding count mismatch: sent {}, received {}",
                texts.len(),
                embeddings.len()
            )));
        }

        Ok(embeddings)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn embed_parses_vectors_in_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/embeddings")
                .json_body_includes(r#"{"model": "all-MiniLM-L6-v2"}"#);
            then.status(200).json_body(json!({
                "data": [
                    {"embedding": [0.1, 0.2, 0.3]},
                    {"embedding": [0.4, 0.5, 0.6]}
                ]
            }));
        });

        let embedder = HttpEmbedder::new(server.base_url(), "all-MiniLM-L6-v2".to_string());
        let vectors = embedder
            .embed(&["first".to_string(), "second".to_string()])
            .await
            .unwrap();

        mock.assert();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0], vec![0.1, 0.2, 0.3]);
        assert_eq!(vectors[1], vec![0.4, 0.5, 0.6]);
    }

    #[tokio::test]
    async fn embed_empty_batch_skips_request() {
        let embedder = HttpEmbedder::new(
            "http://127.0.0.1:1".to_string(),
            "all-MiniLM-L6-v2".to_string(),
        );
        let vectors = embedder.embed(&[]).await.unwrap();
        assert!(vectors.is_empty());
    }

    #[tokio::test]
    async fn embed_rejects_count_mismatch() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/embeddings");
            then.status(200)
                .json_body(json!({"data": [{"embedding": [1.0]}]}));
        });

        let embedder = HttpEmbedder::new(server.base_url(), "all-MiniLM-L6-v2".to_string());
        let err = embedder
            .embed(&["a".to_string(), "b".to_string()])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("mismatch"));
    }
}
