pub mod context;
pub mod credential;
pub mod error;
pub mod event;
pub mod message;
pub mod status;
pub mod transcript;

pub use context::{MAX_CONTEXT_CHARS, PageContext, truncate_chars};
pub use credential::ApiKey;
pub use error::CoreError;
pub use event::SessionEvent;
pub use message::{Message, Role};
pub use status::SessionStatus;
pub use transcript::Transcript;
