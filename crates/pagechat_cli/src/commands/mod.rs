//! Command dispatch.

mod chat;
mod extract;
mod key;

use anyhow::{Result, anyhow};

use pagechat_runtime::FileCredentialStore;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Chat {
            page,
            model,
            base_url,
        } => chat::handle(page, model, base_url).await,
        Command::Key { action } => key::handle(action).await,
        Command::Extract { page } => extract::handle(page).await,
    }
}

/// The credential lives at `~/.pagechat/credentials.json`.
pub(crate) fn credential_store() -> Result<FileCredentialStore> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not find home directory"))?;
    Ok(FileCredentialStore::new(
        home.join(".pagechat").join("credentials.json"),
    ))
}
