use serde::{Deserialize, Serialize};

/// Judge0 status id for a submission waiting in the queue
pub const STATUS_IN_QUEUE: u32 = 1;
/// Judge0 status id for a submission currently running
pub const STATUS_PROCESSING: u32 = 2;
/// Judge0 status id for a failure inside the judge itself
pub const STATUS_INTERNAL_ERROR: u32 = 13;
/// Judge0 status id for a binary the judge could not execute
pub const STATUS_EXEC_FORMAT_ERROR: u32 = 14;

/// Body of `POST /submissions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language_id: u32,
    pub stdin: String,
}

/// Response of `POST /submissions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /submissions/{token}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDetails {
    #[serde(default)]
    pub status: Option<StatusInfo>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub memory: Option<u64>,
}

impl StatusInfo {
    /// Whether the judge is still working on the submission.
    pub fn is_pending(&self) -> bool {
        match self.id {
            Some(id) => id == STATUS_IN_QUEUE || id == STATUS_PROCESSING,
            None => matches!(self.description.as_str(), "In Queue" | "Processing"),
        }
    }

    /// Whether the judge failed on its own side rather than running the program.
    pub fn is_internal_failure(&self) -> bool {
        match self.id {
            Some(id) => id == STATUS_INTERNAL_ERROR || id == STATUS_EXEC_FORMAT_ERROR,
            None => matches!(
                self.description.as_str(),
                "Internal Error" | "Exec Format Error"
            ),
        }
    }
}
