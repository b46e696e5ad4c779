//! Unified request and streaming types shared by providers.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use pagechat_core::Message;

use crate::error::Result;

/// A chat-completion request.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub options: ChatOptions,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            options: ChatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }
}

/// Optional generation parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// One unit of an incremental response.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A piece of assistant text, delivered in order.
    TextDelta { delta: String },
    /// The chunk sequence finished without error.
    Finish { usage: Usage },
}

impl StreamEvent {
    pub fn text_delta(delta: impl Into<String>) -> Self {
        StreamEvent::TextDelta {
            delta: delta.into(),
        }
    }

    pub fn finish(usage: Usage) -> Self {
        StreamEvent::Finish { usage }
    }
}

/// A finished one-shot completion.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: Usage,
}

/// A lazy, finite, non-restartable sequence of stream events.
///
/// The consumer drives it to completion or stops at the first error; it
/// cannot be rewound or restarted.
pub struct ChatStream {
    inner: Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>,
}

impl ChatStream {
    pub fn new(inner: Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>) -> Self {
        Self { inner }
    }
}

impl Stream for ChatStream {
    type Item = Result<StreamEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.as_mut().poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_chat_options_builder() {
        let options = ChatOptions::new().temperature(0.7).max_tokens(1024);
        assert_eq!(options.temperature, Some(0.7));
        assert_eq!(options.max_tokens, Some(1024));
    }

    #[test]
    fn test_chat_request_new() {
        let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("hi")]);
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.options, ChatOptions::default());
    }

    #[test]
    fn test_usage_totals() {
        let usage = Usage::new(10, 20);
        assert_eq!(usage.total_tokens, 30);
    }

    #[tokio::test]
    async fn test_chat_stream_yields_in_order() {
        let events = vec![
            Ok(StreamEvent::text_delta("a")),
            Ok(StreamEvent::text_delta("b")),
            Ok(StreamEvent::finish(Usage::default())),
        ];
        let mut stream = ChatStream::new(Box::pin(futures::stream::iter(events)));

        let mut collected = String::new();
        while let Some(event) = stream.next().await {
            if let StreamEvent::TextDelta { delta } = event.unwrap() {
                collected.push_str(&delta);
            }
        }
        assert_eq!(collected, "ab");
    }
}
