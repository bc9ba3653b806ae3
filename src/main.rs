use std::sync::Arc;

use tokio::net::TcpListener;

use sussurro::application::services::{MovieSearchService, TranscriptionService};
use sussurro::infrastructure::embeddings::CohereEmbedder;
use sussurro::infrastructure::engine::{EngineConfig, ModelCatalog, WhisperCppEngine};
use sussurro::infrastructure::index::PineconeIndex;
use sussurro::infrastructure::observability::{TracingConfig, init_tracing};
use sussurro::infrastructure::staging::LocalStagingArea;
use sussurro::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let engine_config = EngineConfig {
        binary_path: settings.engine.binary_path.clone(),
        diarize: settings.engine.diarize,
        deadline: settings.engine.timeout,
        ..EngineConfig::default()
    };
    let catalog = ModelCatalog::new(settings.engine.model_dir.clone());
    let engine = Arc::new(WhisperCppEngine::new(engine_config, catalog));
    let staging = Arc::new(LocalStagingArea::new(settings.staging.dir.clone())?);
    let transcription_service = Arc::new(TranscriptionService::new(
        engine,
        staging,
        settings.engine.default_model,
    ));

    let embedder = Arc::new(CohereEmbedder::new(
        settings.embeddings.api_key.clone(),
        None,
        settings.embeddings.model.clone(),
    ));
    let index = Arc::new(PineconeIndex::new(
        settings.index.host.clone(),
        settings.index.api_key.clone(),
    ));
    let movie_search_service = Arc::new(MovieSearchService::new(
        embedder,
        index,
        settings.index.top_k,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        transcription_service,
        movie_search_service,
        settings,
    };

    let app = create_router(state);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
