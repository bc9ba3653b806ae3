use std::path::PathBuf;

use super::WhisperModel;

/// A validated, staged transcription request. Immutable once built; the
/// backing file at `source_path` is owned by the staging guard that
/// created it, not by the job.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionJob {
    pub source_path: PathBuf,
    pub original_filename: String,
    pub model: WhisperModel,
    pub language_hint: Option<String>,
    pub size_bytes: u64,
}
