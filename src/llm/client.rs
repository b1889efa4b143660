use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::backend::ChatBackend;
use super::error::{LlmError, Result};
use super::types::{ChatRequest, ChatResponse, ErrorEnvelope, FimRequest, FimResponse, ModelList};
use crate::config::Config;
use crate::core::metrics::Timer;

/// Client for an OpenAI-compatible API
#[derive(Clone)]
pub struct LLMClient {
    client: Client,
    config: Config,
}

impl LLMClient {
    /// Create a new LLM client
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| LlmError::InvalidApiKey(format!("Invalid API key format: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        // No request timeout: a hung call hangs the session
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::ClientBuildFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chat_model(&self) -> &str {
        &self.config.chat_model
    }

    pub fn reasoner_model(&self) -> &str {
        &self.config.reasoner_model
    }

    /// Send a chat completion request to the standard endpoint
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        self.send("chat completion", self.client.post(&url).json(request))
            .await
    }

    /// Send a fill-in-the-middle request to the beta endpoint
    pub async fn complete_fim(&self, request: &FimRequest) -> Result<FimResponse> {
        let url = format!("{}/completions", self.config.beta_url);
        debug!(model = %request.model, "Sending FIM completion request");

        self.send("fim completion", self.client.post(&url).json(request))
            .await
    }

    /// List the models available to this API key
    pub async fn list_models(&self) -> Result<ModelList> {
        let url = format!("{}/models", self.config.base_url);
        debug!("Listing models");

        self.send("list models", self.client.get(&url)).await
    }

    async fn send<T: DeserializeOwned>(&self, operation: &str, request: RequestBuilder) -> Result<T> {
        let timer = Timer::start(operation);

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        timer.finish(status);
        parse_response(status, &body)
    }
}

#[async_trait]
impl ChatBackend for LLMClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.complete(request).await
    }
}

/// Map an HTTP status and body to a typed response or error
pub(crate) fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    if !status.is_success() {
        let message = envelope
            .map(|e| e.error.message)
            .unwrap_or_else(|| body.to_string());

        return Err(match status {
            StatusCode::UNAUTHORIZED => LlmError::InvalidApiKey(message),
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            _ => LlmError::ApiError {
                status: status.as_u16(),
                message,
            },
        });
    }

    // An error envelope can arrive with a 2xx status
    if let Some(envelope) = envelope {
        return Err(LlmError::ApiError {
            status: status.as_u16(),
            message: envelope.error.message,
        });
    }

    serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))
}
