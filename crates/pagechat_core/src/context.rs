use serde::{Deserialize, Serialize};

/// Maximum number of characters of page text carried into a prompt.
///
/// Bounds the token cost of the system message; longer extractions are
/// cut at this many characters.
pub const MAX_CONTEXT_CHARS: usize = 20_000;

/// Truncate `text` to at most `max` characters, respecting char
/// boundaries.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The most recently extracted page text.
///
/// Not versioned or timestamped: a new extraction overwrites the prior
/// value, and chat turns between extractions share the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    text: String,
}

impl PageContext {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bounded = truncate_chars(&text, MAX_CONTEXT_CHARS);
        Self {
            text: bounded.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Overwrite the snapshot with a fresh extraction.
    pub fn replace(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
