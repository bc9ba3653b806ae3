use async_trait::async_trait;

use crate::domain::TranscriptionJob;

/// Terminal state of one engine invocation. Exactly one outcome is
/// produced per run; a handle is never reused.
#[derive(Debug)]
pub enum EngineOutcome {
    /// The engine ran to completion with the given exit code. Both output
    /// streams are fully drained before this is constructed.
    Exited {
        code: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },
    /// The process could not be started at all (binary missing, permission
    /// denied). Distinct from the engine running and exiting non-zero.
    SpawnFailed { detail: String },
    /// The process started but its exit status could not be observed.
    WaitFailed { detail: String },
    /// The configured deadline expired and the process was terminated.
    TimedOut { waited_secs: u64 },
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn run(&self, job: &TranscriptionJob) -> EngineOutcome;
}
