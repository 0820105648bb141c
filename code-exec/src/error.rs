use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Polling failed: {0}")]
    PollFailed(String),

    #[error("Invalid language table: {0}")]
    LanguageTable(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Message reported to callers in `ExecutionResult::diagnostic`.
    ///
    /// Transport failures report the underlying cause verbatim.
    pub fn diagnostic(&self) -> String {
        match self {
            Error::SubmissionFailed(cause) | Error::PollFailed(cause) => cause.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_diagnostic_is_the_cause() {
        let err = Error::SubmissionFailed("connection refused".to_string());
        assert_eq!(err.diagnostic(), "connection refused");
        assert_eq!(err.to_string(), "Submission failed: connection refused");

        let err = Error::PollFailed("API error: 404 - not found".to_string());
        assert_eq!(err.diagnostic(), "API error: 404 - not found");
    }

    #[test]
    fn test_other_diagnostics_use_display() {
        let err = Error::UnsupportedLanguage("cobol".to_string());
        assert_eq!(err.diagnostic(), "Language not supported: cobol");
    }
}
