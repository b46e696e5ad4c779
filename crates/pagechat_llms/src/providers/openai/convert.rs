//! Conversions between unified and OpenAI wire types

use pagechat_core::Message;

use crate::error::{Error, Result};
use crate::types::{ChatRequest, Completion, Usage};

use super::types::{OpenAiMessage, OpenAiRequest, OpenAiResponse};

pub fn to_openai_request(request: &ChatRequest, stream: bool) -> OpenAiRequest {
    OpenAiRequest {
        model: request.model.clone(),
        messages: request.messages.iter().map(to_openai_message).collect(),
        temperature: request.options.temperature,
        max_tokens: request.options.max_tokens,
        stream: stream.then_some(true),
    }
}

fn to_openai_message(message: &Message) -> OpenAiMessage {
    OpenAiMessage {
        role: message.role.as_str().to_string(),
        content: message.content.clone(),
    }
}

/// Extract the single completion field from a non-streaming response.
pub fn from_openai_response(response: OpenAiResponse) -> Result<Completion> {
    let usage = response
        .usage
        .map(|u| Usage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::malformed("response contained no choices"))?;

    Ok(Completion {
        content: choice.message.content,
        usage,
    })
}
