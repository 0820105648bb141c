//! # Judge0 Client
//!
//! A small async client for the [Judge0](https://judge0.com) submissions API.
//! It covers the two endpoints needed to run a program remotely:
//!
//! - `POST /submissions` queues source code and stdin and returns a token
//! - `GET /submissions/{token}` reports the status and outputs of that submission
//!
//! ## Example
//!
//! ```rust,no_run
//! use judge0_client::{BackendConfig, Judge0Client, SubmissionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Judge0Client::new(BackendConfig::new("http://localhost:2358".to_string()))?;
//!
//!     let token = client
//!         .submit(&SubmissionRequest {
//!             source_code: "print(input())".to_string(),
//!             language_id: 71,
//!             stdin: "hello".to_string(),
//!         })
//!         .await?;
//!
//!     let details = client.submission(&token.token).await?;
//!     println!("{:?}", details.stdout);
//!     Ok(())
//! }
//! ```
//!
//! ## Encoding
//!
//! With [`BackendConfig::with_base64_encoded`] the client sends source and stdin
//! base64-encoded and decodes every output field before returning it, so the
//! judge can transport output that is not valid UTF-8. Invalid sequences in the
//! decoded bytes come back as `U+FFFD` rather than failing the whole poll.

mod client;
mod config;
mod error;
mod types;

pub use client::Judge0Client;
pub use config::{BackendConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::Error;
pub use types::*;

/// Result type for Judge0 API operations
pub type Result<T> = std::result::Result<T, Error>;
