use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Embedder, StagingArea, TranscriptionEngine, VectorIndex};
use crate::application::services::MAX_UPLOAD_BYTES;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{healthcheck_handler, movies_handler, transcribe_handler};
use crate::presentation::state::AppState;

// Headroom for multipart framing on top of the payload bound.
const BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES as usize + 1024 * 1024;

pub fn create_router<E, S, M, V>(state: AppState<E, S, M, V>) -> Router
where
    E: TranscriptionEngine + 'static,
    S: StagingArea + 'static,
    M: Embedder + 'static,
    V: VectorIndex + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/openapi.json", get(serve_openapi_spec))
        .route("/healthcheck", get(healthcheck_handler::<E, S, M, V>))
        .route("/movies", get(movies_handler::<E, S, M, V>))
        .route("/transcribe", post(transcribe_handler::<E, S, M, V>))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

async fn serve_openapi_spec() -> impl IntoResponse {
    (
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        include_str!("../../openapi.json"),
    )
}
