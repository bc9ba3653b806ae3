use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{Embedder, StagingArea, TranscriptionEngine, VectorIndex};
use crate::presentation::state::AppState;

pub const APPLICATION_NAME: &str = "Sussurro API";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcheckResponse {
    pub status: String,
    pub application: String,
    pub time_stamp: DateTime<Utc>,
    pub environment: String,
}

pub async fn healthcheck_handler<E, S, M, V>(
    State(state): State<AppState<E, S, M, V>>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
    S: StagingArea + 'static,
    M: Embedder + 'static,
    V: VectorIndex + 'static,
{
    (
        StatusCode::OK,
        Json(HealthcheckResponse {
            status: "OK".to_string(),
            application: APPLICATION_NAME.to_string(),
            time_stamp: Utc::now(),
            environment: state.settings.environment.to_string(),
        }),
    )
}
