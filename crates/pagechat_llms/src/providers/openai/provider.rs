//! OpenAI provider implementation

use async_trait::async_trait;
use reqwest::Client;
use reqwest_eventsource::EventSource;
use tracing::debug;

use pagechat_core::ApiKey;

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::types::{ChatRequest, ChatStream, Completion};

use super::convert::{from_openai_response, to_openai_request};
use super::stream::create_stream;
use super::types::{OpenAiConfig, OpenAiRequest, OpenAiResponse};

/// OpenAI-compatible provider speaking `/chat/completions`.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a provider against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(OpenAiConfig::new().with_base_url(base_url))
    }

    fn request_builder(&self, api_key: &ApiKey, body: &OpenAiRequest) -> reqwest::RequestBuilder {
        let url = format!("{}/chat/completions", self.config.base_url);
        self.client
            .post(&url)
            .bearer_auth(api_key.as_str())
            .json(body)
    }
}

impl Default for OpenAiProvider {
    fn default() -> Self {
        Self::new(OpenAiConfig::default())
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: ChatRequest, api_key: &ApiKey) -> Result<Completion> {
        let body = to_openai_request(&request, false);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        let response = self.request_builder(api_key, &body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(format!(
                "API error {status}: {error_text}"
            )));
        }

        let openai_resp: OpenAiResponse = response.json().await?;
        from_openai_response(openai_resp)
    }

    async fn stream(&self, request: ChatRequest, api_key: &ApiKey) -> Result<ChatStream> {
        let body = to_openai_request(&request, true);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "opening completion stream"
        );

        let req_builder = self.request_builder(api_key, &body);
        let event_source = EventSource::new(req_builder)
            .map_err(|e| Error::stream_error(format!("failed to create event source: {e}")))?;

        create_stream(event_source).await
    }
}
