use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{Embedder, StagingArea, TranscriptionEngine, VectorIndex};
use crate::application::services::{AudioUpload, TranscriptionFailure, TranscriptionRequest};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub transcription: String,
    pub model: String,
    pub language: String,
    pub original_filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct EngineErrorResponse {
    pub error: String,
    pub details: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E, S, M, V>(
    State(state): State<AppState<E, S, M, V>>,
    mut multipart: Multipart,
) -> Response
where
    E: TranscriptionEngine + 'static,
    S: StagingArea + 'static,
    M: Embedder + 'static,
    V: VectorIndex + 'static,
{
    let mut request = TranscriptionRequest::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("failed to read multipart body: {}", e));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                let original_filename = field.file_name().unwrap_or("audio").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read audio field");
                        return bad_request(format!("failed to read audio field: {}", e));
                    }
                };
                tracing::debug!(
                    filename = %original_filename,
                    bytes = data.len(),
                    "Audio field received"
                );
                request.audio = Some(AudioUpload {
                    original_filename,
                    content_type,
                    data,
                });
            }
            "model" => match field.text().await {
                Ok(text) if !text.is_empty() => request.model = Some(text),
                Ok(_) => {}
                Err(e) => return bad_request(format!("failed to read model field: {}", e)),
            },
            "language" => match field.text().await {
                Ok(text) if !text.is_empty() => request.language = Some(text),
                Ok(_) => {}
                Err(e) => return bad_request(format!("failed to read language field: {}", e)),
            },
            _ => {}
        }
    }

    match state.transcription_service.transcribe(request).await {
        Ok(transcription) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                transcription: transcription.text,
                model: transcription.model_used,
                language: transcription.language_used,
                original_filename: transcription.source_file_name,
            }),
        )
            .into_response(),
        Err(failure) => failure_response(failure),
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

fn failure_response(failure: TranscriptionFailure) -> Response {
    match failure {
        TranscriptionFailure::InvalidInput(detail) => bad_request(detail),
        TranscriptionFailure::EngineUnavailable(detail) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(EngineErrorResponse {
                error: "Transcription engine unavailable".to_string(),
                details: detail,
            }),
        )
            .into_response(),
        TranscriptionFailure::EngineError(detail) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(EngineErrorResponse {
                error: "Transcription failed".to_string(),
                details: detail,
            }),
        )
            .into_response(),
        TranscriptionFailure::Internal(detail) => {
            tracing::error!(detail = %detail, "Unexpected pipeline failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EngineErrorResponse {
                    error: "Internal server error".to_string(),
                    details: "unexpected error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
