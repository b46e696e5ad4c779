use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};

/// The ordered sequence of messages shown to the user.
///
/// At most one assistant message is in progress at any time, and it is
/// always the last element; streaming updates replace its content rather
/// than appending new messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append the empty assistant placeholder that becomes the single
    /// in-progress message for the current turn.
    pub fn begin_assistant(&mut self) {
        self.messages.push(Message::assistant(""));
    }

    /// Overwrite the content of the last message. No-op on an empty
    /// transcript.
    pub fn set_last_content(&mut self, content: impl Into<String>) {
        if let Some(last) = self.messages.last_mut() {
            last.content = content.into();
        }
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True when the last message is an assistant entry, i.e. a placeholder
    /// or a settled response.
    pub fn ends_with_assistant(&self) -> bool {
        matches!(
            self.messages.last(),
            Some(Message {
                role: Role::Assistant,
                ..
            })
        )
    }
}
