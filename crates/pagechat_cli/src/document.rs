//! Local documents standing in for the active browser tab.

use std::path::PathBuf;

use async_trait::async_trait;

use pagechat_runtime::{BrowserError, TabAccess, TabHandle};

/// Serves a file on disk as the "active tab".
///
/// Blocks are the file's blank-line-separated paragraphs — the flattened
/// body-text variant of extraction, with no selector awareness.
pub struct LocalDocument {
    path: PathBuf,
}

impl LocalDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TabAccess for LocalDocument {
    async fn active_tab(&self) -> Result<TabHandle, BrowserError> {
        if !self.path.exists() {
            return Err(BrowserError::NoActiveTab);
        }

        let mut tab = TabHandle::new(1);
        if let Some(name) = self.path.file_name().and_then(|n| n.to_str()) {
            tab = tab.with_title(name);
        }
        Ok(tab)
    }

    async fn text_blocks(
        &self,
        _tab: &TabHandle,
        _selectors: &str,
    ) -> Result<Vec<String>, BrowserError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| BrowserError::Script(format!("{}: {e}", self.path.display())))?;

        Ok(split_paragraphs(&contents))
    }
}

/// Split text into paragraphs on blank lines, flattening intra-paragraph
/// line breaks.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line.trim());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs_on_blank_lines() {
        let text = "First paragraph.\n\nSecond paragraph\nspans two lines.\n\n\nThird.";
        let blocks = split_paragraphs(text);

        assert_eq!(
            blocks,
            vec![
                "First paragraph.",
                "Second paragraph spans two lines.",
                "Third.",
            ]
        );
    }

    #[test]
    fn test_split_paragraphs_empty_input() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_no_active_tab() {
        let doc = LocalDocument::new("/nonexistent/page.txt");
        let err = doc.active_tab().await.unwrap_err();
        assert!(matches!(err, BrowserError::NoActiveTab));
    }
}
