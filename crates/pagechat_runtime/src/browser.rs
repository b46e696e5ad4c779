//! Tab and document access seam.

use async_trait::async_trait;
use thiserror::Error;

/// Faults from the host browser layer.
///
/// These are values, never panics: a missing tab or restricted page must
/// degrade to an explanatory status, not crash the caller.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no active tab")]
    NoActiveTab,

    #[error("page is restricted: {0}")]
    Restricted(String),

    #[error("page script failed: {0}")]
    Script(String),
}

/// Handle to the currently active tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabHandle {
    pub id: u32,
    pub title: Option<String>,
}

impl TabHandle {
    pub fn new(id: u32) -> Self {
        Self { id, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Host-side access to the active tab's document.
#[async_trait]
pub trait TabAccess: Send + Sync {
    async fn active_tab(&self) -> Result<TabHandle, BrowserError>;

    /// Run the selector query inside the page and return the text content
    /// of each matching element, in document order.
    async fn text_blocks(
        &self,
        tab: &TabHandle,
        selectors: &str,
    ) -> Result<Vec<String>, BrowserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_handle_builder() {
        let tab = TabHandle::new(7).with_title("Example Domain");
        assert_eq!(tab.id, 7);
        assert_eq!(tab.title.as_deref(), Some("Example Domain"));
    }

    #[test]
    fn test_browser_error_messages() {
        assert_eq!(BrowserError::NoActiveTab.to_string(), "no active tab");
        assert!(
            BrowserError::Restricted("chrome://settings".to_string())
                .to_string()
                .contains("chrome://settings")
        );
    }
}
