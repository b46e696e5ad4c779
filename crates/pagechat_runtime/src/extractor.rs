//! Page text extraction.

use std::sync::Arc;

use tracing::debug;

use pagechat_core::{MAX_CONTEXT_CHARS, truncate_chars};

use crate::browser::{BrowserError, TabAccess};

/// Elements considered text-bearing when reading a page.
pub const CANDIDATE_SELECTORS: &str = "p, h1, h2, h3, li, article";

/// Blocks at or below this trimmed length are skipped — nav crumbs,
/// button labels, stray fragments.
pub const MIN_BLOCK_CHARS: usize = 20;

/// Pulls a bounded snapshot of readable text from the active tab.
pub struct ContextExtractor {
    tabs: Arc<dyn TabAccess>,
    max_chars: usize,
    min_block_chars: usize,
}

impl ContextExtractor {
    pub fn new(tabs: Arc<dyn TabAccess>) -> Self {
        Self {
            tabs,
            max_chars: MAX_CONTEXT_CHARS,
            min_block_chars: MIN_BLOCK_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_min_block_chars(mut self, min_block_chars: usize) -> Self {
        self.min_block_chars = min_block_chars;
        self
    }

    /// Extract the page's readable text: qualifying blocks newline-joined
    /// in document order, cut at the character cap.
    ///
    /// Returns an empty string when no block qualifies.
    pub async fn extract(&self) -> Result<String, BrowserError> {
        let tab = self.tabs.active_tab().await?;
        let blocks = self.tabs.text_blocks(&tab, CANDIDATE_SELECTORS).await?;

        let text = blocks
            .iter()
            .map(|block| block.trim())
            .filter(|block| block.chars().count() > self.min_block_chars)
            .collect::<Vec<_>>()
            .join("\n");

        let bounded = truncate_chars(&text, self.max_chars);
        debug!(
            tab = tab.id,
            blocks = blocks.len(),
            chars = bounded.chars().count(),
            "extracted page text"
        );
        Ok(bounded.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::TabHandle;
    use async_trait::async_trait;

    struct FakeTabs {
        blocks: Vec<String>,
        error: Option<fn() -> BrowserError>,
    }

    impl FakeTabs {
        fn with_blocks(blocks: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                blocks: blocks.iter().map(|b| b.to_string()).collect(),
                error: None,
            })
        }

        fn failing(error: fn() -> BrowserError) -> Arc<Self> {
            Arc::new(Self {
                blocks: Vec::new(),
                error: Some(error),
            })
        }
    }

    #[async_trait]
    impl TabAccess for FakeTabs {
        async fn active_tab(&self) -> Result<TabHandle, BrowserError> {
            if let Some(error) = self.error {
                return Err(error());
            }
            Ok(TabHandle::new(1))
        }

        async fn text_blocks(
            &self,
            _tab: &TabHandle,
            _selectors: &str,
        ) -> Result<Vec<String>, BrowserError> {
            Ok(self.blocks.clone())
        }
    }

    #[tokio::test]
    async fn test_keeps_only_qualifying_blocks_in_order() {
        // 5, 30 and 50 character paragraphs: only the latter two survive.
        let short = "tiny";
        let medium = "a".repeat(30);
        let long = "b".repeat(50);
        let tabs = FakeTabs::with_blocks(&[short, &medium, &long]);

        let extracted = ContextExtractor::new(tabs).extract().await.unwrap();
        assert_eq!(extracted, format!("{medium}\n{long}"));
    }

    #[tokio::test]
    async fn test_threshold_is_strictly_greater_than() {
        let exactly_twenty = "x".repeat(MIN_BLOCK_CHARS);
        let twenty_one = "y".repeat(MIN_BLOCK_CHARS + 1);
        let tabs = FakeTabs::with_blocks(&[&exactly_twenty, &twenty_one]);

        let extracted = ContextExtractor::new(tabs).extract().await.unwrap();
        assert_eq!(extracted, twenty_one);
    }

    #[tokio::test]
    async fn test_filters_on_trimmed_length() {
        let padded_short = format!("   short   {}", " ".repeat(40));
        let tabs = FakeTabs::with_blocks(&[&padded_short]);

        let extracted = ContextExtractor::new(tabs).extract().await.unwrap();
        assert_eq!(extracted, "");
    }

    #[tokio::test]
    async fn test_empty_when_nothing_qualifies() {
        let tabs = FakeTabs::with_blocks(&[]);
        let extracted = ContextExtractor::new(tabs).extract().await.unwrap();
        assert!(extracted.is_empty());
    }

    #[tokio::test]
    async fn test_output_capped_at_max_chars() {
        let block = "c".repeat(120);
        let blocks: Vec<String> = (0..5).map(|_| block.clone()).collect();
        let refs: Vec<&str> = blocks.iter().map(|b| b.as_str()).collect();
        let tabs = FakeTabs::with_blocks(&refs);

        let extracted = ContextExtractor::new(tabs)
            .with_max_chars(200)
            .extract()
            .await
            .unwrap();
        assert_eq!(extracted.chars().count(), 200);
    }

    #[tokio::test]
    async fn test_tab_failure_is_returned_not_panicked() {
        let tabs = FakeTabs::failing(|| BrowserError::NoActiveTab);
        let err = ContextExtractor::new(tabs).extract().await.unwrap_err();
        assert!(matches!(err, BrowserError::NoActiveTab));
    }
}
