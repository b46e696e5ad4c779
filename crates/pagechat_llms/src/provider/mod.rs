//! Provider trait

use async_trait::async_trait;

use pagechat_core::ApiKey;

use crate::error::Result;
use crate::types::{ChatRequest, ChatStream, Completion};

/// A chat-completion backend.
///
/// Two access patterns over the same contract: `complete` returns the
/// whole response parsed from one JSON body, `stream` yields it as an
/// incremental chunk sequence. The API key is an argument on every call;
/// providers hold no credential state.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier, e.g. `"openai"`.
    fn provider_id(&self) -> &str;

    /// One-shot completion.
    async fn complete(&self, request: ChatRequest, api_key: &ApiKey) -> Result<Completion>;

    /// Incremental completion as a lazy, finite chunk stream.
    async fn stream(&self, request: ChatRequest, api_key: &ApiKey) -> Result<ChatStream>;
}
