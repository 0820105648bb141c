use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::BackendConfig,
    error::Error,
    types::{SubmissionDetails, SubmissionRequest, SubmissionToken},
};

/// Client for the Judge0 submissions API
#[derive(Debug, Clone)]
pub struct Judge0Client {
    client: Client,
    config: BackendConfig,
}

impl Judge0Client {
    /// Create a new Judge0Client with the given configuration
    pub fn new(config: BackendConfig) -> Result<Self, Error> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Queue a submission and return the token the judge issued for it
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionToken, Error> {
        let body = if self.config.base64_encoded {
            SubmissionRequest {
                source_code: STANDARD.encode(&request.source_code),
                language_id: request.language_id,
                stdin: STANDARD.encode(&request.stdin),
            }
        } else {
            request.clone()
        };

        debug!(language_id = request.language_id, "Submitting to judge0");

        let response = self
            .client
            .post(format!("{}/submissions", self.config.api_url))
            .query(&[("base64_encoded", self.base64_flag()), ("wait", "false")])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Fetch the current state of a submission
    pub async fn submission(&self, token: &str) -> Result<SubmissionDetails, Error> {
        let response = self
            .client
            .get(format!("{}/submissions/{}", self.config.api_url, token))
            .query(&[("base64_encoded", self.base64_flag())])
            .send()
            .await?;

        let details: SubmissionDetails = Self::parse(response).await?;
        debug!(
            token,
            status = ?details.status.as_ref().map(|s| s.description.as_str()),
            "Fetched submission"
        );

        if self.config.base64_encoded {
            decode_details(details)
        } else {
            Ok(details)
        }
    }

    fn base64_flag(&self) -> &'static str {
        if self.config.base64_encoded {
            "true"
        } else {
            "false"
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: response.text().await?,
            });
        }

        response.json::<T>().await.map_err(Error::HttpClient)
    }
}

fn decode_details(details: SubmissionDetails) -> Result<SubmissionDetails, Error> {
    Ok(SubmissionDetails {
        stdout: decode_field("stdout", details.stdout)?,
        stderr: decode_field("stderr", details.stderr)?,
        compile_output: decode_field("compile_output", details.compile_output)?,
        message: decode_field("message", details.message)?,
        ..details
    })
}

fn decode_field(field: &'static str, value: Option<String>) -> Result<Option<String>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };

    // Judge0 wraps encoded output at 60 columns.
    let compact: String = value.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact).map_err(|e| Error::Decode {
        field,
        message: e.to_string(),
    })?;

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(api_url: String) -> Judge0Client {
        Judge0Client::new(BackendConfig::new(api_url)).unwrap()
    }

    fn hello_request() -> SubmissionRequest {
        SubmissionRequest {
            source_code: "print(input())".to_string(),
            language_id: 71,
            stdin: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_returns_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submissions"))
            .and(query_param("base64_encoded", "false"))
            .and(body_json(json!({
                "source_code": "print(input())",
                "language_id": 71,
                "stdin": "hello"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "token": "d85cd024-1548-4165-96c7-7bc88673f194"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(mock_server.uri());
        let token = client.submit(&hello_request()).await.unwrap();

        assert_eq!(token.token, "d85cd024-1548-4165-96c7-7bc88673f194");
    }

    #[tokio::test]
    async fn test_submission_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/submissions/abc"))
            .and(query_param("base64_encoded", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stdout": null,
                "stderr": null,
                "compile_output": "main.cpp:1:1: error: expected ';'",
                "status": { "id": 6, "description": "Compilation Error" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(mock_server.uri());
        let details = client.submission("abc").await.unwrap();

        assert_eq!(details.stdout, None);
        assert_eq!(
            details.compile_output.as_deref(),
            Some("main.cpp:1:1: error: expected ';'")
        );
        assert_eq!(details.status.unwrap().id, Some(6));
    }

    #[tokio::test]
    async fn test_api_error_handling() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submissions"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "language_id": ["language with id 9999 doesn't exist"]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(mock_server.uri());
        let result = client.submit(&hello_request()).await;

        assert!(matches!(
            result,
            Err(Error::Api {
                status_code: 422,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_malformed_token_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submissions"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(mock_server.uri());
        let result = client.submit(&hello_request()).await;

        assert!(matches!(result, Err(Error::HttpClient(_))));
    }

    #[tokio::test]
    async fn test_base64_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/submissions"))
            .and(query_param("base64_encoded", "true"))
            .and(body_json(json!({
                "source_code": STANDARD.encode("print(input())"),
                "language_id": 71,
                "stdin": STANDARD.encode("hello")
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": "b64" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/submissions/b64"))
            .and(query_param("base64_encoded", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stdout": "aGVs\nbG8K\n",
                "stderr": null,
                "status": { "id": 3, "description": "Accepted" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = BackendConfig::new(mock_server.uri()).with_base64_encoded(true);
        let client = Judge0Client::new(config).unwrap();

        let token = client.submit(&hello_request()).await.unwrap();
        let details = client.submission(&token.token).await.unwrap();

        assert_eq!(details.stdout.as_deref(), Some("hello\n"));
        assert_eq!(details.stderr, None);
    }

    #[tokio::test]
    async fn test_invalid_base64_output() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/submissions/bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stdout": "%%%",
                "status": { "id": 3, "description": "Accepted" }
            })))
            .mount(&mock_server)
            .await;

        let config = BackendConfig::new(mock_server.uri()).with_base64_encoded(true);
        let client = Judge0Client::new(config).unwrap();
        let result = client.submission("bad").await;

        assert!(matches!(result, Err(Error::Decode { field: "stdout", .. })));
    }

    #[tokio::test]
    async fn test_non_utf8_output_is_replaced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/submissions/bin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stdout": STANDARD.encode([b'o', b'k', 0xff, 0xfe]),
                "status": { "id": 3, "description": "Accepted" }
            })))
            .mount(&mock_server)
            .await;

        let config = BackendConfig::new(mock_server.uri()).with_base64_encoded(true);
        let client = Judge0Client::new(config).unwrap();
        let details = client.submission("bin").await.unwrap();

        assert_eq!(details.stdout.as_deref(), Some("ok\u{fffd}\u{fffd}"));
        assert!(client.config().base64_encoded);
    }

    #[tokio::test]
    async fn test_timeout_handling() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/submissions/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let config =
            BackendConfig::new(mock_server.uri()).with_request_timeout(Duration::from_millis(200));
        let client = Judge0Client::new(config).unwrap();
        let result = client.submission("slow").await;

        assert!(matches!(result, Err(Error::HttpClient(_))));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = Judge0Client::new(BackendConfig::new("ce.judge0.com".to_string()));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
