use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::GenerationClient;
use crate::domain::DomainError;

/// Default target: Ollama running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const GENERATE_PATH: &str = "/api/generate";
/// Default model pulled by the Ollama quickstart.
pub const DEFAULT_MODEL: &str = "gemma:2b";
/// Local models can take a while on the first token; one fixed budget for
/// connect + read, no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    /// Always `false`: the caller wants one complete response, never chunks.
    stream: bool,
}

/// Minimal subset of the Ollama generate response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    response: Option<String>,
}

/// HTTP client for the Ollama `/api/generate` endpoint.
///
/// Implements [`GenerationClient`] so the use case stays decoupled from
/// transport and serialization details.
///
/// Override the target via environment variables:
///
/// ```text
/// OLLAMA_BASE_URL=http://localhost:11434
/// OLLAMA_MODEL=gemma:2b
/// ```
pub struct OllamaClient {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + GENERATE_PATH).
    url: String,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{GENERATE_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables with local-first defaults:
    ///
    /// | Variable          | Default                   |
    /// |-------------------|---------------------------|
    /// | `OLLAMA_BASE_URL` | `http://localhost:11434`  |
    /// | `OLLAMA_MODEL`    | `gemma:2b`                |
    pub fn from_env() -> Self {
        let base =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(model, base)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("OllamaClient: POST {} model={}", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OllamaClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("OllamaClient: server returned {status}");
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::malformed_response(format!("OllamaClient: failed to parse body: {e}"))
        })?;

        api_response.response.ok_or_else(|| {
            DomainError::malformed_response("OllamaClient: body is missing the `response` field")
        })
    }
}
