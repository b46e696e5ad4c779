//! CLI entry point for pagechat.

mod cli;
mod commands;
mod document;
mod output;
mod telemetry;

use clap::Parser;

use crate::cli::Cli;

/// Load env files: `~/.pagechat/env` first, then the project `.env`.
fn load_env() {
    if let Some(home) = dirs::home_dir() {
        let env_path = home.join(".pagechat").join("env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() {
    load_env();
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
