//! Engine configuration.

use pagechat_core::MAX_CONTEXT_CHARS;
use pagechat_llms::ChatOptions;

use crate::extractor::MIN_BLOCK_CHARS;

/// Greeting appended once after the first successful page read.
pub const DEFAULT_GREETING: &str = "Hi! I've read the page you're viewing. Ask me to summarize \
it, or ask about any detail of its content.";

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model identifier sent to the provider
    pub model: String,
    /// Character cap for the page snapshot
    pub max_context_chars: usize,
    /// Minimum trimmed block length kept by the extractor
    pub min_block_chars: usize,
    /// Assistant greeting after the first successful extraction
    pub greeting: String,
    /// Generation parameters passed through to the provider
    pub options: ChatOptions,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_context_chars: MAX_CONTEXT_CHARS,
            min_block_chars: MIN_BLOCK_CHARS,
            greeting: DEFAULT_GREETING.to_string(),
            options: ChatOptions::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_context_chars(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars;
        self
    }

    pub fn with_min_block_chars(mut self, min_block_chars: usize) -> Self {
        self.min_block_chars = min_block_chars;
        self
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("PAGECHAT_MODEL") {
            config.model = model;
        }

        if let Ok(limit) = std::env::var("PAGECHAT_CONTEXT_LIMIT") {
            if let Ok(val) = limit.parse::<usize>() {
                config.max_context_chars = val;
            }
        }

        if let Ok(max_tokens) = std::env::var("PAGECHAT_MAX_TOKENS") {
            if let Ok(val) = max_tokens.parse::<u32>() {
                config.options = config.options.clone().max_tokens(val);
            }
        }

        config
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
