use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    EngineOutcome, StagedAudio, StagingArea, TranscriptionEngine,
};
use crate::domain::{Transcription, TranscriptionJob, WhisperModel};

pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "flac", "ogg", "webm", "mp4"];

const AUTO_DETECT: &str = "auto-detect";

/// Raw, pre-validation form of a transcription request, as it arrives off
/// the wire. Everything here is untrusted.
#[derive(Debug, Default)]
pub struct TranscriptionRequest {
    pub audio: Option<AudioUpload>,
    pub model: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug)]
pub struct AudioUpload {
    pub original_filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Runs the transcription pipeline: validate, stage, invoke the engine,
/// resolve its terminal state into a result. The staged file is owned by a
/// [`StagedAudio`] guard for the whole run, so cleanup happens on every
/// exit path, including early failure returns.
pub struct TranscriptionService<E, S>
where
    E: TranscriptionEngine,
    S: StagingArea,
{
    engine: Arc<E>,
    staging: Arc<S>,
    default_model: WhisperModel,
}

impl<E, S> TranscriptionService<E, S>
where
    E: TranscriptionEngine,
    S: StagingArea,
{
    pub fn new(engine: Arc<E>, staging: Arc<S>, default_model: WhisperModel) -> Self {
        Self {
            engine,
            staging,
            default_model,
        }
    }

    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, TranscriptionFailure> {
        // Model selector is checked before any file is written or process
        // spawned, so a bad selector can never leave artifacts behind.
        let model = match request.model {
            Some(raw) => raw
                .parse::<WhisperModel>()
                .map_err(|e| TranscriptionFailure::InvalidInput(e.to_string()))?,
            None => self.default_model,
        };

        let upload = request.audio.ok_or_else(|| {
            TranscriptionFailure::InvalidInput("no audio file uploaded".to_string())
        })?;

        validate_upload(&upload)?;

        let staged = self
            .staging
            .stage(&upload.original_filename, &upload.data)
            .await
            .map_err(|e| TranscriptionFailure::Internal(e.to_string()))?;

        let job = TranscriptionJob {
            source_path: staged.path().to_path_buf(),
            original_filename: upload.original_filename,
            model,
            language_hint: request.language,
            size_bytes: upload.data.len() as u64,
        };

        tracing::debug!(
            file = %job.original_filename,
            model = %job.model,
            bytes = job.size_bytes,
            "Transcription job staged"
        );

        let outcome = self.engine.run(&job).await;

        // `staged` stays alive across resolution; its Drop at the end of
        // this scope removes the upload and any leftover side artifact.
        self.resolve(&job, &staged, outcome).await
    }

    async fn resolve(
        &self,
        job: &TranscriptionJob,
        staged: &StagedAudio,
        outcome: EngineOutcome,
    ) -> Result<Transcription, TranscriptionFailure> {
        match outcome {
            EngineOutcome::SpawnFailed { detail } => {
                tracing::error!(detail = %detail, "Engine process could not be started");
                Err(TranscriptionFailure::EngineUnavailable(detail))
            }
            EngineOutcome::WaitFailed { detail } => {
                tracing::error!(detail = %detail, "Engine exit status could not be observed");
                Err(TranscriptionFailure::Internal(detail))
            }
            EngineOutcome::TimedOut { waited_secs } => {
                tracing::error!(waited_secs, "Engine terminated after deadline expiry");
                Err(TranscriptionFailure::EngineError(format!(
                    "engine timed out after {}s",
                    waited_secs
                )))
            }
            EngineOutcome::Exited { code: 0, stdout, .. } => {
                let text = self.read_transcript(staged, &stdout).await;
                tracing::info!(
                    file = %job.original_filename,
                    chars = text.len(),
                    "Transcription completed"
                );
                Ok(Transcription {
                    text,
                    model_used: job.model.to_string(),
                    language_used: job
                        .language_hint
                        .clone()
                        .unwrap_or_else(|| AUTO_DETECT.to_string()),
                    source_file_name: job.original_filename.clone(),
                })
            }
            EngineOutcome::Exited { code, stderr, .. } => {
                let diagnostics = String::from_utf8_lossy(&stderr).trim().to_string();
                tracing::error!(code, diagnostics = %diagnostics, "Engine exited non-zero");
                let detail = if diagnostics.is_empty() {
                    format!("engine exited with code {}", code)
                } else {
                    diagnostics
                };
                Err(TranscriptionFailure::EngineError(detail))
            }
        }
    }

    /// The engine may write its transcript to a side file next to the
    /// input; when present it supersedes the stdout buffer and is removed
    /// here rather than waiting for the guard.
    async fn read_transcript(&self, staged: &StagedAudio, stdout: &[u8]) -> String {
        let side_path = staged.side_file_path();
        match tokio::fs::read_to_string(&side_path).await {
            Ok(contents) => {
                if let Err(e) = tokio::fs::remove_file(&side_path).await {
                    tracing::warn!(path = %side_path.display(), error = %e, "Failed to remove side file");
                }
                contents.trim().to_string()
            }
            Err(_) => String::from_utf8_lossy(stdout).trim().to_string(),
        }
    }
}

fn validate_upload(upload: &AudioUpload) -> Result<(), TranscriptionFailure> {
    let audio_content_type = upload
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("audio/"));
    let allowed_extension = Path::new(&upload.original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));

    if !audio_content_type && !allowed_extension {
        return Err(TranscriptionFailure::InvalidInput(format!(
            "unsupported file type: {}",
            upload.original_filename
        )));
    }

    if upload.data.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(TranscriptionFailure::InvalidInput(format!(
            "file exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionFailure {
    #[error("{0}")]
    InvalidInput(String),
    #[error("engine process could not be started: {0}")]
    EngineUnavailable(String),
    #[error("{0}")]
    EngineError(String),
    #[error("internal error: {0}")]
    Internal(String),
}
