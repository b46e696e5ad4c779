//! pagechat_llms — chat-completion client with streaming support.
//!
//! One [`Provider`] seam over a chat-completions endpoint, usable in two
//! forms: a one-shot JSON completion (`complete`) and an incremental SSE
//! chunk stream (`stream`). Both surface provider faults (bad key, rate
//! limit, malformed request) as a single [`Error`] value the engine folds
//! into its error transition.
//!
//! The credential travels with each call rather than living inside the
//! provider, so a key update takes effect on the very next turn.

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;

pub use error::{Error, Result};
pub use provider::Provider;
pub use providers::OpenAiProvider;
pub use types::{ChatOptions, ChatRequest, ChatStream, Completion, StreamEvent, Usage};
