use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use code_exec::{ExecutionBackend, ExecutionRequest, ExecutionResult, JobClient, LanguageEntry};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
    #[error("Execution error: {0}")]
    ExecutionError(#[from] code_exec::Error),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidLanguage(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::InvalidRequest { status, message } => (*status, message.clone()),
            ServerError::ExecutionError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.diagnostic()),
            ServerError::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(ExecutionResult::failure(message))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Body of `POST /api/compile`
#[derive(Debug, Deserialize, Serialize)]
pub struct CompileRequest {
    #[serde(alias = "source_code")]
    pub code: String,
    /// Language key such as `cpp`, not a backend language id
    pub language: String,
    #[serde(default, alias = "stdin")]
    pub input: Option<String>,
}

pub struct AppState<B> {
    client: Arc<JobClient<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

pub fn create_app<B>(client: JobClient<B>) -> Router
where
    B: ExecutionBackend + 'static,
{
    let state = AppState {
        client: Arc::new(client),
    };

    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(languages::<B>))
        .route("/api/compile", post(compile::<B>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting code execution server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn languages<B>(State(state): State<AppState<B>>) -> Json<Vec<LanguageEntry>>
where
    B: ExecutionBackend + 'static,
{
    Json(state.client.languages().entries().to_vec())
}

async fn compile<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<CompileRequest>, JsonRejection>,
) -> Result<Json<ExecutionResult>, ServerError>
where
    B: ExecutionBackend + 'static,
{
    let Json(payload) = payload?;
    let request = ExecutionRequest::new(
        payload.code,
        payload.language,
        payload.input.unwrap_or_default(),
    );

    match state.client.try_run(&request).await {
        Ok(result) => Ok(Json(result)),
        Err(code_exec::Error::UnsupportedLanguage(language)) => {
            Err(ServerError::InvalidLanguage(language))
        }
        Err(e) => {
            error!(language = %request.language, "Compile request failed: {}", e);
            Err(ServerError::ExecutionError(e))
        }
    }
}
