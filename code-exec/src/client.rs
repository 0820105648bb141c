use judge0_client::{BackendConfig, Judge0Client};
use tracing::{debug, error, info, warn};

use crate::{
    backend::ExecutionBackend,
    error::Error,
    language::LanguageTable,
    normalize::normalize,
    policy::PollPolicy,
    types::{ExecutionRequest, ExecutionResult, JobStatus, JobToken, Submission},
};

/// Submits code to an execution backend, waits for the job and normalizes the result.
///
/// A `JobClient` holds no per-run state, so one instance can serve any number
/// of concurrent runs.
pub struct JobClient<B> {
    backend: B,
    languages: LanguageTable,
    policy: PollPolicy,
}

impl JobClient<Judge0Client> {
    /// Create a client talking to a Judge0 instance
    pub fn judge0(config: BackendConfig) -> Result<Self, Error> {
        let backend =
            Judge0Client::new(config).map_err(|e| Error::Configuration(e.to_string()))?;
        Ok(Self::new(backend))
    }
}

impl<B: ExecutionBackend> JobClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            languages: LanguageTable::default(),
            policy: PollPolicy::default(),
        }
    }

    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Submit a request and return the backend's token for it.
    ///
    /// Unknown languages are rejected before the backend is contacted.
    pub async fn submit(&self, request: &ExecutionRequest) -> Result<JobToken, Error> {
        let language_id = self.languages.backend_id(&request.language)?;

        let submission = Submission {
            source_code: request.source_code.clone(),
            language_id,
            stdin: request.stdin.clone(),
        };

        let token = self.backend.submit(&submission).await?;
        debug!(language = %request.language, language_id, %token, "Job submitted");
        Ok(token)
    }

    /// Poll a job according to the poll policy.
    ///
    /// Returns as soon as a terminal status is seen. When the attempts run
    /// out the last observed status is returned as is, even if the job is
    /// still queued or processing.
    pub async fn await_result(&self, token: &JobToken) -> Result<JobStatus, Error> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            let status = self.backend.status(token).await?;

            if status.is_terminal() {
                debug!(%token, attempt, status = status.label(), "Job reached terminal status");
                return Ok(status);
            }

            if attempt >= max_attempts {
                warn!(
                    %token,
                    attempts = attempt,
                    status = status.label(),
                    "Job still pending after final poll, returning last status"
                );
                return Ok(status);
            }

            debug!(
                %token,
                attempt,
                status = status.label(),
                interval_ms = self.policy.interval().as_millis() as u64,
                "Job pending, polling again"
            );
            tokio::time::sleep(self.policy.interval()).await;
            attempt += 1;
        }
    }

    /// Submit, wait and normalize, reporting failures as typed errors.
    pub async fn try_run(&self, request: &ExecutionRequest) -> Result<ExecutionResult, Error> {
        let token = self.submit(request).await?;
        let status = self.await_result(&token).await?;
        Ok(normalize(status))
    }

    /// Submit, wait and normalize.
    ///
    /// Never fails: errors become a result with `success` unset and the error
    /// message in `diagnostic`.
    pub async fn run(&self, request: &ExecutionRequest) -> ExecutionResult {
        match self.try_run(request).await {
            Ok(result) => {
                info!(
                    language = %request.language,
                    completed = result.completed,
                    "Run finished"
                );
                result
            }
            Err(e) => {
                error!(language = %request.language, "Run failed: {}", e);
                ExecutionResult::failure(e.diagnostic())
            }
        }
    }
}
