use serde::{Deserialize, Serialize};

use crate::message::Role;
use crate::status::SessionStatus;

/// Incremental updates the engine emits toward its host UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    StatusChanged { status: SessionStatus },

    TurnStart { role: Role },

    TextDelta { text: String },

    TurnEnd,

    Error { error: String },
}

impl SessionEvent {
    pub fn status_changed(status: SessionStatus) -> Self {
        SessionEvent::StatusChanged { status }
    }

    pub fn turn_start(role: Role) -> Self {
        SessionEvent::TurnStart { role }
    }

    pub fn text_delta(text: impl Into<String>) -> Self {
        SessionEvent::TextDelta { text: text.into() }
    }

    pub fn turn_end() -> Self {
        SessionEvent::TurnEnd
    }

    pub fn error(error: impl Into<String>) -> Self {
        SessionEvent::Error {
            error: error.into(),
        }
    }
}
