use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{StagedAudio, StagingArea, StagingError};

/// Stages uploads into a shared directory under unique names. Concurrent
/// requests never collide, so no locking is needed.
pub struct LocalStagingArea {
    base_dir: PathBuf,
}

impl LocalStagingArea {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StagingError> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn unique_name(original_filename: &str) -> String {
        match Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
        {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl StagingArea for LocalStagingArea {
    async fn stage(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<StagedAudio, StagingError> {
        let path = self.base_dir.join(Self::unique_name(original_filename));
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Upload staged");
        Ok(StagedAudio::new(path))
    }
}
