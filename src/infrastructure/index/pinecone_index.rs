use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{IndexMatch, VectorIndex, VectorIndexError};
use crate::domain::Embedding;

/// Pinecone data-plane client over the index host's HTTP API.
pub struct PineconeIndex {
    client: Client,
    api_key: String,
    index_host: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    top_k: usize,
    vector: Vec<f32>,
    include_values: bool,
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct Match {
    id: String,
    score: f32,
    #[serde(default)]
    metadata: serde_json::Value,
}

impl PineconeIndex {
    pub fn new(index_host: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            index_host,
        }
    }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<IndexMatch>, VectorIndexError> {
        let request_body = QueryRequest {
            top_k,
            vector: embedding.values.clone(),
            include_values: false,
            include_metadata: true,
        };

        let response = self
            .client
            .post(format!("{}/query", self.index_host))
            .header("Api-Key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| VectorIndexError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::QueryFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| VectorIndexError::QueryFailed(e.to_string()))?;

        Ok(query_response
            .matches
            .into_iter()
            .map(|m| IndexMatch {
                id: m.id,
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }
}
