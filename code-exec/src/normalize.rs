use crate::types::{ExecutionResult, JobOutput, JobStatus, NO_OUTPUT};

/// Collapse a job status into the caller-facing result.
///
/// Program and compile failures are successful runs: their text is carried in
/// `output` and `diagnostic`. Non-terminal statuses yield [`NO_OUTPUT`] with
/// `completed` unset. A backend error reports its message as the diagnostic
/// only when there is no compiler output.
pub fn normalize(status: JobStatus) -> ExecutionResult {
    let completed = status.is_terminal();

    let (output, diagnostic) = match status {
        JobStatus::Finished(output) => {
            let (output, compile_output) = split_output(output);
            (output, compile_output.unwrap_or_default())
        }
        JobStatus::BackendError { message, output } => {
            let (output, compile_output) = split_output(output);
            (output, compile_output.unwrap_or(message))
        }
        JobStatus::Queued | JobStatus::Processing => (NO_OUTPUT.to_string(), String::new()),
    };

    ExecutionResult {
        success: true,
        output,
        diagnostic,
        completed,
    }
}

fn split_output(output: JobOutput) -> (String, Option<String>) {
    let JobOutput {
        stdout,
        stderr,
        compile_output,
    } = output;

    let output = non_empty(stdout)
        .or_else(|| non_empty(stderr))
        .unwrap_or_else(|| NO_OUTPUT.to_string());
    (output, non_empty(compile_output))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
