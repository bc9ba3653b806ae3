use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{EngineOutcome, TranscriptionEngine};
use crate::domain::TranscriptionJob;

/// Scripted engine outcomes for tests.
#[derive(Debug, Clone)]
pub enum MockEngineScript {
    /// Exit 0 with the given stdout.
    Succeed { stdout: String },
    /// Exit 0 after writing the given content to the `<input>.txt` side
    /// file, with unrelated noise on stdout.
    SucceedWithSideFile { contents: String, stdout: String },
    /// Non-zero exit with stderr diagnostics.
    Fail { code: i32, stderr: String },
    /// The process never starts.
    Unavailable,
    /// The process starts but its exit status cannot be observed.
    WaitFailed,
}

pub struct MockEngine {
    script: MockEngineScript,
    runs: AtomicUsize,
}

impl MockEngine {
    pub fn new(script: MockEngineScript) -> Self {
        Self {
            script,
            runs: AtomicUsize::new(0),
        }
    }

    /// How many times the engine was actually invoked.
    pub fn run_count(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionEngine for MockEngine {
    async fn run(&self, job: &TranscriptionJob) -> EngineOutcome {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            MockEngineScript::Succeed { stdout } => EngineOutcome::Exited {
                code: 0,
                stdout: stdout.clone().into_bytes(),
                stderr: Vec::new(),
            },
            MockEngineScript::SucceedWithSideFile { contents, stdout } => {
                let side = format!("{}.txt", job.source_path.display());
                std::fs::write(side, contents).expect("mock side file write");
                EngineOutcome::Exited {
                    code: 0,
                    stdout: stdout.clone().into_bytes(),
                    stderr: Vec::new(),
                }
            }
            MockEngineScript::Fail { code, stderr } => EngineOutcome::Exited {
                code: *code,
                stdout: Vec::new(),
                stderr: stderr.clone().into_bytes(),
            },
            MockEngineScript::Unavailable => EngineOutcome::SpawnFailed {
                detail: "engine process could not be started".to_string(),
            },
            MockEngineScript::WaitFailed => EngineOutcome::WaitFailed {
                detail: "waiting on engine failed".to_string(),
            },
        }
    }
}
