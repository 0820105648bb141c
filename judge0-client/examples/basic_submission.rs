use judge0_client::{BackendConfig, Judge0Client, SubmissionRequest};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load JUDGE0_API_URL from .env if present
    dotenv::dotenv().ok();

    let source_code = r#"
#include <iostream>
using namespace std;

int main() {
    int a, b;
    cin >> a >> b;
    cout << a + b << endl;
    return 0;
}
"#;

    let client = Judge0Client::new(BackendConfig::from_env())?;
    let token = client
        .submit(&SubmissionRequest {
            source_code: source_code.to_string(),
            language_id: 54, // C++ (GCC 9.2.0)
            stdin: "2 3".to_string(),
        })
        .await?;

    println!("Submitted: {}", token.token);

    let mut details = client.submission(&token.token).await?;
    while details.status.as_ref().is_some_and(|s| s.is_pending()) {
        tokio::time::sleep(Duration::from_millis(500)).await;
        details = client.submission(&token.token).await?;
    }

    if let Some(status) = &details.status {
        println!("Status: {}", status.description);
    }
    println!("Stdout: {}", details.stdout.unwrap_or_default());
    if let Some(compile_output) = details.compile_output {
        println!("Compiler: {}", compile_output);
    }

    Ok(())
}
