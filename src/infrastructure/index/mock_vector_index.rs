use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{IndexMatch, VectorIndex, VectorIndexError};
use crate::domain::Embedding;

pub struct MockVectorIndex;

#[async_trait]
impl VectorIndex for MockVectorIndex {
    async fn query(
        &self,
        _embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<IndexMatch>, VectorIndexError> {
        Ok((0..top_k.min(2))
            .map(|i| IndexMatch {
                id: format!("movie-{}", i),
                score: 0.9 - 0.1 * i as f32,
                metadata: json!({"title": format!("Movie {}", i)}),
            })
            .collect())
    }
}
