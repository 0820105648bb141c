//! # Code Execution Client
//!
//! Runs source code on a remote, queue-based execution backend and turns the
//! backend's report into a single [`ExecutionResult`].
//!
//! A run is three steps:
//!
//! 1. **submit** the code, stdin and resolved language id, receiving a job token
//! 2. **await** the job by polling its status on a fixed [`PollPolicy`]
//! 3. **normalize** the last observed status into `{ success, output, diagnostic }`
//!
//! ```rust,no_run
//! use code_exec::{ExecutionRequest, JobClient};
//! use judge0_client::BackendConfig;
//!
//! # async fn example() -> code_exec::Result<()> {
//! let client = JobClient::judge0(BackendConfig::from_env())?;
//! let result = client
//!     .run(&ExecutionRequest::new("print(input())", "python", "hi"))
//!     .await;
//! println!("{}", result.output);
//! # Ok(())
//! # }
//! ```

mod backend;
mod client;
mod error;
mod language;
mod normalize;
mod policy;
mod types;

#[cfg(test)]
mod tests;

pub use backend::ExecutionBackend;
pub use client::JobClient;
pub use error::Error;
pub use language::{LanguageEntry, LanguageTable};
pub use normalize::normalize;
pub use policy::PollPolicy;
pub use types::{
    ExecutionRequest, ExecutionResult, JobOutput, JobStatus, JobToken, Submission, NO_OUTPUT,
};

/// Result type for code execution operations
pub type Result<T> = std::result::Result<T, Error>;
