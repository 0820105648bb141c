use async_trait::async_trait;
use judge0_client::{Judge0Client, SubmissionDetails, SubmissionRequest, STATUS_IN_QUEUE};

use crate::{
    error::Error,
    types::{JobOutput, JobStatus, JobToken, Submission},
};

/// Remote service that queues submissions and reports on them by token
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Queue a submission, failing with [`Error::SubmissionFailed`]
    async fn submit(&self, submission: &Submission) -> Result<JobToken, Error>;

    /// Report the current state of a job, failing with [`Error::PollFailed`]
    async fn status(&self, token: &JobToken) -> Result<JobStatus, Error>;
}

#[async_trait]
impl ExecutionBackend for Judge0Client {
    async fn submit(&self, submission: &Submission) -> Result<JobToken, Error> {
        let request = SubmissionRequest {
            source_code: submission.source_code.clone(),
            language_id: submission.language_id,
            stdin: submission.stdin.clone(),
        };

        let response = Judge0Client::submit(self, &request)
            .await
            .map_err(|e| Error::SubmissionFailed(e.to_string()))?;

        if response.token.trim().is_empty() {
            return Err(Error::SubmissionFailed(
                "backend returned an empty token".to_string(),
            ));
        }

        Ok(JobToken::new(response.token))
    }

    async fn status(&self, token: &JobToken) -> Result<JobStatus, Error> {
        let details = self
            .submission(token.as_str())
            .await
            .map_err(|e| Error::PollFailed(e.to_string()))?;

        Ok(job_status(details))
    }
}

pub(crate) fn job_status(details: SubmissionDetails) -> JobStatus {
    let output = JobOutput {
        stdout: details.stdout,
        stderr: details.stderr,
        compile_output: details.compile_output,
    };

    let Some(status) = details.status else {
        return JobStatus::Finished(output);
    };

    if status.is_pending() {
        if status.id == Some(STATUS_IN_QUEUE) || status.description == "In Queue" {
            JobStatus::Queued
        } else {
            JobStatus::Processing
        }
    } else if status.is_internal_failure() {
        let message = details
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(status.description);
        JobStatus::BackendError { message, output }
    } else {
        JobStatus::Finished(output)
    }
}
