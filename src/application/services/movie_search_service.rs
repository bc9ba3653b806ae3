use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, IndexMatch, VectorIndex, VectorIndexError,
};
use crate::domain::MovieRecord;

/// Embeds the fixed featured record and queries the vector index for its
/// nearest neighbours.
pub struct MovieSearchService<M, V>
where
    M: Embedder,
    V: VectorIndex,
{
    embedder: Arc<M>,
    index: Arc<V>,
    top_k: usize,
}

impl<M, V> MovieSearchService<M, V>
where
    M: Embedder,
    V: VectorIndex,
{
    pub fn new(embedder: Arc<M>, index: Arc<V>, top_k: usize) -> Self {
        Self {
            embedder,
            index,
            top_k,
        }
    }

    pub async fn search_featured(&self) -> Result<Vec<IndexMatch>, MovieSearchError> {
        let record = MovieRecord::featured();
        let embedding = self.embedder.embed(&record.embedding_text()).await?;

        if embedding.is_empty() {
            return Err(MovieSearchError::EmptyEmbedding);
        }

        let matches = self.index.query(&embedding, self.top_k).await?;
        tracing::info!(matches = matches.len(), "Vector index query completed");
        Ok(matches)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MovieSearchError {
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("No embedding vector returned.")]
    EmptyEmbedding,
    #[error("index query: {0}")]
    Query(#[from] VectorIndexError),
}
