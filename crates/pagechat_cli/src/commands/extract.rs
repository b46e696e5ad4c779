//! `pagechat extract` — one-shot extraction debug.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use pagechat_runtime::ContextExtractor;

use crate::document::LocalDocument;
use crate::output;

const PREVIEW_CHARS: usize = 400;

pub async fn handle(page: PathBuf) -> Result<()> {
    let spinner = output::spinner("Reading page...");
    let extractor = ContextExtractor::new(Arc::new(LocalDocument::new(page)));
    let result = extractor.extract().await;
    spinner.finish_and_clear();

    match result {
        Ok(text) if text.is_empty() => {
            output::warning("No qualifying text found.");
        }
        Ok(text) => {
            let total = text.chars().count();
            output::header(&format!("Extracted {total} characters"));
            let preview: String = text.chars().take(PREVIEW_CHARS).collect();
            println!("{preview}");
            if total > PREVIEW_CHARS {
                output::dim("...");
            }
        }
        Err(e) => {
            output::error(&format!("Unable to read page: {e}"));
        }
    }

    Ok(())
}
