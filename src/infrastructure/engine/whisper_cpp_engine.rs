use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::time::timeout;

use crate::application::ports::{EngineOutcome, TranscriptionEngine};
use crate::domain::TranscriptionJob;

use super::ModelCatalog;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub binary_path: PathBuf,
    pub diarize: bool,
    /// Hard deadline for a single invocation. `None` means wait forever.
    pub deadline: Option<Duration>,
    /// Grace period between SIGTERM and SIGKILL on deadline expiry.
    pub kill_grace: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from("./whisper.cpp/main"),
            diarize: false,
            deadline: None,
            kill_grace: Duration::from_secs(2),
        }
    }
}

/// Invokes whisper.cpp as a child process, draining both output pipes
/// concurrently so neither stream can block the other or block exit
/// detection.
pub struct WhisperCppEngine {
    config: EngineConfig,
    catalog: ModelCatalog,
}

impl WhisperCppEngine {
    pub fn new(config: EngineConfig, catalog: ModelCatalog) -> Self {
        Self { config, catalog }
    }

    fn build_command(&self, job: &TranscriptionJob) -> Command {
        let mut cmd = Command::new(&self.config.binary_path);
        cmd.arg("-m")
            .arg(self.catalog.resolve(job.model))
            .arg("-f")
            .arg(&job.source_path)
            .arg("--output-txt")
            .arg("--no-timestamps");
        if let Some(lang) = &job.language_hint {
            cmd.arg("-l").arg(lang);
        }
        if self.config.diarize {
            cmd.arg("--diarize");
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    /// SIGTERM first, escalating to SIGKILL once the grace period runs out.
    async fn terminate(&self, child: &mut Child) {
        #[cfg(unix)]
        if let Some(pid) = child.id() {
            let _ = Command::new("kill")
                .args(["-TERM", &pid.to_string()])
                .output()
                .await;
            if timeout(self.config.kill_grace, child.wait()).await.is_ok() {
                return;
            }
            tracing::warn!(pid, "Engine ignored SIGTERM, sending SIGKILL");
        }
        if let Err(e) = child.kill().await {
            tracing::warn!(error = %e, "Failed to kill engine process");
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCppEngine {
    async fn run(&self, job: &TranscriptionJob) -> EngineOutcome {
        let mut cmd = self.build_command(job);

        tracing::debug!(
            binary = %self.config.binary_path.display(),
            model = %job.model,
            input = %job.source_path.display(),
            "Spawning transcription engine"
        );

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                return EngineOutcome::SpawnFailed {
                    detail: format!("{}: {}", self.config.binary_path.display(), e),
                };
            }
        };

        // Drain both pipes concurrently with the wait below; an engine that
        // floods either stream must not deadlock against a full pipe.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_task = tokio::spawn(drain(stdout_pipe));
        let stderr_task = tokio::spawn(drain(stderr_pipe));

        let status = match self.config.deadline {
            None => child.wait().await,
            Some(deadline) => match timeout(deadline, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    self.terminate(&mut child).await;
                    stdout_task.abort();
                    stderr_task.abort();
                    return EngineOutcome::TimedOut {
                        waited_secs: deadline.as_secs(),
                    };
                }
            },
        };

        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        match status {
            Ok(status) => EngineOutcome::Exited {
                code: status.code().unwrap_or(-1),
                stdout,
                stderr,
            },
            Err(e) => EngineOutcome::WaitFailed {
                detail: format!("waiting on engine failed: {}", e),
            },
        }
    }
}

async fn drain(pipe: Option<impl AsyncReadExt + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut reader) = pipe {
        if let Err(e) = reader.read_to_end(&mut buf).await {
            tracing::warn!(error = %e, "Failed to drain engine output stream");
        }
    }
    buf
}
