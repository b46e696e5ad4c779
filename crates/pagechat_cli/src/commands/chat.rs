//! `pagechat chat` — interactive session over a local document.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use pagechat_core::{Role, SessionEvent, SessionStatus};
use pagechat_llms::OpenAiProvider;
use pagechat_runtime::{ChatEngine, EngineConfig, RejectReason, TurnOutcome};

use crate::commands::credential_store;
use crate::document::LocalDocument;
use crate::output;

pub async fn handle(
    page: PathBuf,
    model: Option<String>,
    base_url: Option<String>,
) -> Result<()> {
    let mut config = EngineConfig::from_env();
    if let Some(model) = model {
        config = config.with_model(model);
    }

    let provider = match base_url {
        Some(url) => OpenAiProvider::with_base_url(url),
        None => OpenAiProvider::default(),
    };

    let (event_tx, event_rx) = mpsc::channel(256);
    let mut engine = ChatEngine::new(
        config,
        Arc::new(provider),
        Arc::new(LocalDocument::new(page)),
        Arc::new(credential_store()?),
        event_tx,
    );

    let renderer = tokio::spawn(render_events(event_rx));

    engine.init().await;

    if !engine.has_credential() {
        output::warning("No API key stored. Run 'pagechat key set' first.");
    }
    output::dim("Type a question, '/refresh' to re-read the page, or '/quit' to exit.");

    let stdin = io::stdin();
    loop {
        // Let the renderer drain before showing the next prompt.
        tokio::time::sleep(Duration::from_millis(50)).await;
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "/quit" | "/exit" => break,
            "/refresh" => engine.refresh_context().await,
            _ => match engine.submit(line).await {
                TurnOutcome::Rejected(RejectReason::MissingCredential) => {
                    output::warning("No API key stored. Run 'pagechat key set' first.");
                }
                TurnOutcome::Rejected(RejectReason::Busy) => {
                    output::warning("A turn is already in flight.");
                }
                TurnOutcome::Rejected(RejectReason::EmptyInput) => {}
                TurnOutcome::Success | TurnOutcome::Failed => {}
            },
        }
    }

    drop(engine);
    let _ = renderer.await;
    Ok(())
}

/// Drain engine events and render them incrementally.
async fn render_events(mut rx: mpsc::Receiver<SessionEvent>) {
    let mut in_assistant_turn = false;

    while let Some(event) = rx.recv().await {
        match event {
            SessionEvent::StatusChanged { status } => match status {
                SessionStatus::Idle | SessionStatus::Requesting => {}
                status => output::dim(&status.to_string()),
            },
            SessionEvent::TurnStart {
                role: Role::Assistant,
            } => {
                in_assistant_turn = true;
            }
            SessionEvent::TurnStart { .. } => {}
            SessionEvent::TextDelta { text } => {
                if in_assistant_turn {
                    print!("{text}");
                    let _ = io::stdout().flush();
                }
            }
            SessionEvent::TurnEnd => {
                if in_assistant_turn {
                    println!();
                    in_assistant_turn = false;
                }
            }
            SessionEvent::Error { error } => {
                println!();
                output::error(&error);
            }
        }
    }
}
