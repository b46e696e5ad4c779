//! `pagechat key` — manage the stored credential.

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};

use pagechat_core::ApiKey;
use pagechat_runtime::{CredentialStore, FileCredentialStore};

use crate::cli::KeyAction;
use crate::commands::credential_store;
use crate::output;

pub async fn handle(action: KeyAction) -> Result<()> {
    let store = credential_store()?;
    match action {
        KeyAction::Set { key } => set(&store, key).await,
        KeyAction::Show => show(&store).await,
    }
}

async fn set(store: &FileCredentialStore, key: Option<String>) -> Result<()> {
    let raw = match key {
        Some(key) => key,
        None => {
            print!("Enter API key: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let key = ApiKey::new(raw.trim()).ok_or_else(|| anyhow!("key must not be empty"))?;
    store.save(&key).await?;
    output::success(&format!(
        "Saved key {} to {}",
        key.masked(),
        store.path().display()
    ));
    Ok(())
}

async fn show(store: &FileCredentialStore) -> Result<()> {
    match store.load().await? {
        Some(key) => println!("{}", key.masked()),
        None => output::dim("No key stored."),
    }
    Ok(())
}
