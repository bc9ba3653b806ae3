use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Guard over a staged upload. Dropping it removes the staged file and any
/// `<path>.txt` side artifact the engine may have written next to it, so
/// cleanup runs on every exit path without per-branch delete calls.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
}

impl StagedAudio {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the engine writes its optional side output: the input path
    /// with `.txt` appended (not substituted).
    pub fn side_file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.txt", self.path.display()))
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        let side = self.side_file_path();
        if side.exists() {
            if let Err(e) = std::fs::remove_file(&side) {
                tracing::warn!(path = %side.display(), error = %e, "Failed to remove side file");
            }
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Staged upload removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload");
            }
        }
    }
}

#[async_trait]
pub trait StagingArea: Send + Sync {
    /// Persist an upload to a uniquely named location and hand ownership
    /// of its deletion to the returned guard.
    async fn stage(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<StagedAudio, StagingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("staging write failed: {0}")]
    Io(#[from] io::Error),
}
