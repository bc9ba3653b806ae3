use std::sync::Arc;

use crate::application::ports::{Embedder, StagingArea, TranscriptionEngine, VectorIndex};
use crate::application::services::{MovieSearchService, TranscriptionService};
use crate::presentation::config::Settings;

pub struct AppState<E, S, M, V>
where
    E: TranscriptionEngine,
    S: StagingArea,
    M: Embedder,
    V: VectorIndex,
{
    pub transcription_service: Arc<TranscriptionService<E, S>>,
    pub movie_search_service: Arc<MovieSearchService<M, V>>,
    pub settings: Settings,
}

impl<E, S, M, V> Clone for AppState<E, S, M, V>
where
    E: TranscriptionEngine,
    S: StagingArea,
    M: Embedder,
    V: VectorIndex,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            movie_search_service: Arc::clone(&self.movie_search_service),
            settings: self.settings.clone(),
        }
    }
}
