//! OpenAI-specific wire types

use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL (default: https://api.openai.com/v1)
    pub base_url: String,
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        // Strip /chat/completions suffix if the full endpoint URL was given
        if url.ends_with("/chat/completions") {
            url = url.trim_end_matches("/chat/completions").to_string();
        } else if url.ends_with("/chat/completions/") {
            url = url.trim_end_matches("/chat/completions/").to_string();
        }
        if url.ends_with('/') {
            url = url.trim_end_matches('/').to_string();
        }
        self.base_url = url;
        self
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OpenAI chat completion request
#[derive(Debug, Serialize)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// OpenAI message
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OpenAiMessage {
    pub role: String,
    pub content: String,
}

/// OpenAI chat completion response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct OpenAiResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<OpenAiChoice>,
    pub usage: Option<OpenAiUsage>,
}

/// OpenAI response choice
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct OpenAiChoice {
    pub index: u32,
    pub message: OpenAiMessage,
    pub finish_reason: Option<String>,
}

/// OpenAI usage statistics
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct OpenAiUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// OpenAI streaming chunk
#[derive(Debug, Deserialize)]
pub struct OpenAiStreamEvent {
    pub choices: Option<Vec<OpenAiStreamChoice>>,
    #[serde(default)]
    pub usage: Option<OpenAiUsage>,
}

/// OpenAI streaming choice
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct OpenAiStreamChoice {
    pub index: u32,
    pub delta: OpenAiStreamDelta,
    pub finish_reason: Option<String>,
}

/// OpenAI streaming delta
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct OpenAiStreamDelta {
    pub role: Option<String>,
    pub content: Option<String>,
}
