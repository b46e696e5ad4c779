//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chat with the page you're reading
#[derive(Parser)]
#[command(name = "pagechat", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive chat session over a local document
    Chat {
        /// Document read as the active page
        #[arg(long)]
        page: PathBuf,
        /// Model to use (e.g. gpt-4o-mini). Uses PAGECHAT_MODEL env if not set.
        #[arg(long)]
        model: Option<String>,
        /// Base URL of the chat-completions endpoint
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Run extraction once and show what the engine would read
    Extract {
        /// Document read as the active page
        #[arg(long)]
        page: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store a new API key
    Set {
        /// The key; prompted for when omitted
        key: Option<String>,
    },
    /// Show the stored key (masked)
    Show,
}
