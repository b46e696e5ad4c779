use std::fmt;

use serde::{Deserialize, Serialize};

/// What the engine is doing right now.
///
/// Exactly one status is active at a time; a new value overwrites the
/// previous one, nothing is queued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionStatus {
    Initializing,
    /// Reading the active page.
    Extracting,
    /// Extraction succeeded and produced text.
    Connected,
    /// Extraction succeeded but nothing on the page qualified.
    NoContent,
    /// Extraction failed (no tab, restricted page, script fault).
    Unreadable,
    /// A turn is in flight.
    Requesting,
    Idle,
    Error { message: String },
}

impl SessionStatus {
    pub fn error(message: impl Into<String>) -> Self {
        SessionStatus::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SessionStatus::Error { .. } | SessionStatus::Unreadable)
    }

    /// Whether the engine has a usable page snapshot behind this status.
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionStatus::Connected)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Initializing
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Initializing => write!(f, "Initializing..."),
            SessionStatus::Extracting => write!(f, "Reading the current page..."),
            SessionStatus::Connected => write!(f, "Connected to the current page"),
            SessionStatus::NoContent => write!(f, "No readable text found on this page"),
            SessionStatus::Unreadable => write!(f, "Unable to read the page"),
            SessionStatus::Requesting => write!(f, "Waiting for the model..."),
            SessionStatus::Idle => write!(f, "Ready"),
            SessionStatus::Error { message } => write!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_initializing() {
        assert_eq!(SessionStatus::default(), SessionStatus::Initializing);
    }

    #[test]
    fn test_serialization_tag() {
        let json = serde_json::to_string(&SessionStatus::Connected).unwrap();
        assert_eq!(json, r#"{"type":"connected"}"#);
    }

    #[test]
    fn test_error_carries_message() {
        let status = SessionStatus::error("rate limited");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains(r#""type":"error"#));
        assert!(json.contains("rate limited"));

        let decoded: SessionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, status);
    }

    #[test]
    fn test_is_error() {
        assert!(SessionStatus::error("boom").is_error());
        assert!(SessionStatus::Unreadable.is_error());
        assert!(!SessionStatus::Idle.is_error());
        assert!(!SessionStatus::Requesting.is_error());
    }

    #[test]
    fn test_display_indicator_text() {
        assert_eq!(SessionStatus::Idle.to_string(), "Ready");
        assert_eq!(
            SessionStatus::error("bad key").to_string(),
            "Error: bad key"
        );
    }
}
