use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

pub struct MockEmbedder;

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Ok(Embedding::new(vec![0.1; 1024]))
    }
}

/// Simulates a provider that answers 200 with no vectors.
pub struct EmptyEmbedder;

#[async_trait::async_trait]
impl Embedder for EmptyEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, EmbedderError> {
        Ok(Embedding::new(Vec::new()))
    }
}
