use std::path::PathBuf;

use crate::domain::WhisperModel;

/// Resolves a model selector to the ggml weight asset on disk. The assets
/// are shared, read-only resources; nothing here is owned by a job.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    model_dir: PathBuf,
}

impl ModelCatalog {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
        }
    }

    /// Total over the closed model enum: every selector that survived
    /// parsing maps to a path. Whether the asset actually exists is the
    /// engine's problem to report.
    pub fn resolve(&self, model: WhisperModel) -> PathBuf {
        self.model_dir.join(model.asset_file_name())
    }
}
