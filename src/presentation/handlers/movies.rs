use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{
    Embedder, IndexMatch, StagingArea, TranscriptionEngine, VectorIndex,
};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct MoviesResponse {
    pub matches: Vec<IndexMatch>,
}

#[derive(Serialize)]
pub struct MoviesErrorResponse {
    pub errors: String,
}

#[tracing::instrument(skip(state))]
pub async fn movies_handler<E, S, M, V>(State(state): State<AppState<E, S, M, V>>) -> Response
where
    E: TranscriptionEngine + 'static,
    S: StagingArea + 'static,
    M: Embedder + 'static,
    V: VectorIndex + 'static,
{
    match state.movie_search_service.search_featured().await {
        Ok(matches) => (StatusCode::OK, Json(MoviesResponse { matches })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Movie search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MoviesErrorResponse {
                    errors: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
