use serde::{Deserialize, Serialize};
use std::fmt;

/// Output reported when the program wrote nothing to stdout or stderr
pub const NO_OUTPUT: &str = "No output";

/// Code execution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Source code to execute
    pub source_code: String,
    /// Language key, resolved through the language table
    pub language: String,
    /// Input data for the program
    #[serde(default)]
    pub stdin: String,
}

impl ExecutionRequest {
    pub fn new(
        source_code: impl Into<String>,
        language: impl Into<String>,
        stdin: impl Into<String>,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            language: language.into(),
            stdin: stdin.into(),
        }
    }
}

/// Payload handed to an [`ExecutionBackend`](crate::ExecutionBackend) once the
/// language has been resolved to the backend's identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub source_code: String,
    pub language_id: u32,
    pub stdin: String,
}

/// Opaque handle the backend issued for one submitted job.
///
/// Tokens are deliberately not `Clone`: each one lives inside the call that
/// created it.
#[derive(Debug, PartialEq, Eq)]
pub struct JobToken(String);

impl JobToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outputs the backend captured for a job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobOutput {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
}

/// State of a job as reported by one status poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    Processing,
    Finished(JobOutput),
    /// The backend failed on its own side; any output it captured is kept
    BackendError { message: String, output: JobOutput },
}

impl JobStatus {
    /// Whether the backend will report anything further for this job.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished(_) | JobStatus::BackendError { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Finished(_) => "finished",
            JobStatus::BackendError { .. } => "backend_error",
        }
    }
}

/// Normalized result of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// False only when the backend could not be reached or understood
    pub success: bool,
    /// Program stdout, else stderr, else [`NO_OUTPUT`]; never empty
    pub output: String,
    /// Compiler output or the failure message; empty when there is none
    pub diagnostic: String,
    /// Whether the last observed job status was terminal
    #[serde(default)]
    pub completed: bool,
}

impl ExecutionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: NO_OUTPUT.to_string(),
            diagnostic: message.into(),
            completed: false,
        }
    }
}
