use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Embedding;

/// One scored hit from the vector index, metadata included.
#[derive(Debug, Clone, Serialize)]
pub struct IndexMatch {
    pub id: String,
    pub score: f32,
    pub metadata: serde_json::Value,
}

#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<IndexMatch>, VectorIndexError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VectorIndexError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
