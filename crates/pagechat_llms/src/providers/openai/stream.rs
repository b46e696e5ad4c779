//! OpenAI streaming support
//!
//! The endpoint speaks SSE:
//! - `data: {"choices":[{"delta":{"content":"..."}}]}` for text deltas
//! - `data: [DONE]` to signal stream end

use futures::stream::StreamExt;
use reqwest_eventsource::{Event, EventSource};

use crate::error::{Error, Result};
use crate::types::{ChatStream, StreamEvent, Usage};

use super::types::OpenAiStreamEvent;

/// Drive an [`EventSource`] into the unified chunk stream.
pub async fn create_stream(mut event_source: EventSource) -> Result<ChatStream> {
    let stream = async_stream::stream! {
        let mut usage = Usage::default();

        while let Some(event) = event_source.next().await {
            match event {
                Ok(Event::Open) => continue,
                Ok(Event::Message(message)) => {
                    if message.data == "[DONE]" {
                        yield Ok(StreamEvent::finish(usage.clone()));
                        break;
                    }

                    match serde_json::from_str::<OpenAiStreamEvent>(&message.data) {
                        Ok(chunk) => {
                            if let Some(u) = &chunk.usage {
                                usage = Usage::new(u.prompt_tokens, u.completion_tokens);
                            }
                            for stream_event in process_chunk(chunk) {
                                yield Ok(stream_event);
                            }
                        }
                        Err(e) => {
                            yield Err(Error::stream_error(format!(
                                "failed to parse chunk: {e}"
                            )));
                            break;
                        }
                    }
                }
                Err(reqwest_eventsource::Error::StreamEnded) => break,
                Err(reqwest_eventsource::Error::InvalidStatusCode(status, response)) => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "unable to read error body".to_string());
                    yield Err(Error::provider_error(format!(
                        "API error {status}: {body}"
                    )));
                    break;
                }
                Err(e) => {
                    yield Err(Error::stream_error(e.to_string()));
                    break;
                }
            }
        }

        event_source.close();
    };

    Ok(ChatStream::new(Box::pin(stream)))
}

/// Convert one parsed SSE chunk into unified events.
fn process_chunk(chunk: OpenAiStreamEvent) -> Vec<StreamEvent> {
    let mut events = Vec::new();

    if let Some(choices) = chunk.choices {
        for choice in choices {
            if let Some(content) = choice.delta.content {
                if !content.is_empty() {
                    events.push(StreamEvent::text_delta(content));
                }
            }
        }
    }

    events
}
