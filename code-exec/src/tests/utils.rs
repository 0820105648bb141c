use judge0_client::{BackendConfig, Judge0Client};
use std::time::Duration;

use crate::{JobClient, JobOutput, JobStatus, PollPolicy};

pub fn finished_stdout(stdout: &str) -> JobStatus {
    JobStatus::Finished(JobOutput {
        stdout: Some(stdout.to_string()),
        stderr: Some(String::new()),
        compile_output: None,
    })
}

/// Poll schedule short enough for tests that run against a real HTTP mock
pub fn fast_policy(max_attempts: u32) -> PollPolicy {
    PollPolicy::fixed(max_attempts, Duration::from_millis(20))
}

pub fn judge0_job_client(api_url: String, policy: PollPolicy) -> JobClient<Judge0Client> {
    JobClient::judge0(BackendConfig::new(api_url))
        .expect("Failed to create judge0 client")
        .with_policy(policy)
}
