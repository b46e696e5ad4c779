//! The chat engine: turn state machine and streaming assembly.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use pagechat_core::{
    ApiKey, Message, PageContext, Role, SessionEvent, SessionStatus, Transcript,
};
use pagechat_llms::{ChatRequest, Provider, StreamEvent};

use crate::browser::TabAccess;
use crate::config::EngineConfig;
use crate::credentials::CredentialStore;
use crate::error::EngineError;
use crate::extractor::ContextExtractor;
use crate::prompt::build_prompt;

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A turn is already in flight.
    Busy,
    /// The trimmed input was empty.
    EmptyInput,
    /// No credential is available.
    MissingCredential,
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guard failure: no transcript mutation, no status change, no
    /// network call.
    Rejected(RejectReason),
    /// The chunk sequence finished cleanly.
    Success,
    /// The turn failed; the error text is in the transcript.
    Failed,
}

/// The contextual chat-streaming engine.
///
/// Owns the transcript, the page snapshot, the credential and the status
/// indicator; host layers observe it through the event channel and the
/// accessors. One turn at a time: a submission while busy is rejected,
/// nothing is queued.
pub struct ChatEngine {
    config: EngineConfig,
    provider: Arc<dyn Provider>,
    extractor: ContextExtractor,
    store: Arc<dyn CredentialStore>,
    event_tx: mpsc::Sender<SessionEvent>,

    transcript: Transcript,
    page_context: PageContext,
    api_key: Option<ApiKey>,
    status: SessionStatus,
    busy: bool,
    greeted: bool,
}

impl ChatEngine {
    pub fn new(
        config: EngineConfig,
        provider: Arc<dyn Provider>,
        tabs: Arc<dyn TabAccess>,
        store: Arc<dyn CredentialStore>,
        event_tx: mpsc::Sender<SessionEvent>,
    ) -> Self {
        let extractor = ContextExtractor::new(tabs)
            .with_max_chars(config.max_context_chars)
            .with_min_block_chars(config.min_block_chars);

        Self {
            config,
            provider,
            extractor,
            store,
            event_tx,
            transcript: Transcript::new(),
            page_context: PageContext::empty(),
            api_key: None,
            status: SessionStatus::Initializing,
            busy: false,
            greeted: false,
        }
    }

    /// Load the stored credential, then read the page for the first time.
    pub async fn init(&mut self) {
        match self.store.load().await {
            Ok(key) => self.api_key = key,
            Err(e) => {
                warn!(error = %e, "failed to load stored credential");
            }
        }
        self.refresh_context().await;
    }

    /// Re-read the active page, overwriting the context snapshot.
    ///
    /// Failures never propagate: the engine degrades to an explanatory
    /// status and the chat stays usable with an empty context.
    pub async fn refresh_context(&mut self) {
        self.set_status(SessionStatus::Extracting).await;

        match self.extractor.extract().await {
            Ok(text) if text.is_empty() => {
                self.page_context.replace(text);
                self.set_status(SessionStatus::NoContent).await;
            }
            Ok(text) => {
                self.page_context.replace(text);
                self.set_status(SessionStatus::Connected).await;
                self.maybe_greet().await;
            }
            Err(e) => {
                warn!(error = %e, "page extraction failed");
                self.set_status(SessionStatus::Unreadable).await;
            }
        }
    }

    /// Update the credential in memory and persist it. The new key is
    /// used from the very next turn.
    pub async fn update_credential(&mut self, key: ApiKey) -> Result<(), EngineError> {
        self.api_key = Some(key.clone());
        self.store.save(&key).await?;
        Ok(())
    }

    /// Drive one full turn: guard, append the user message, stream the
    /// assistant response into the transcript.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        if self.busy {
            return TurnOutcome::Rejected(RejectReason::Busy);
        }
        let input = input.trim();
        if input.is_empty() {
            return TurnOutcome::Rejected(RejectReason::EmptyInput);
        }
        let Some(api_key) = self.api_key.clone() else {
            return TurnOutcome::Rejected(RejectReason::MissingCredential);
        };

        // The prompt carries the history as it stood before this turn.
        let history = self.transcript.messages().to_vec();

        self.busy = true;
        self.transcript.push(Message::user(input));
        let _ = self
            .event_tx
            .send(SessionEvent::turn_start(Role::User))
            .await;
        self.set_status(SessionStatus::Requesting).await;

        let prompt = build_prompt(&self.page_context, &history, input);
        let request = ChatRequest::new(self.config.model.clone(), prompt)
            .with_options(self.config.options.clone());

        info!(
            model = %self.config.model,
            history = history.len(),
            "starting turn"
        );

        let mut stream = match self.provider.stream(request, &api_key).await {
            Ok(s) => s,
            Err(e) => return self.fail_turn(e.to_string()).await,
        };

        // The placeholder every chunk update overwrites in place.
        self.transcript.begin_assistant();
        let _ = self
            .event_tx
            .send(SessionEvent::turn_start(Role::Assistant))
            .await;

        let mut accumulated = String::new();
        while let Some(event) = stream.next().await {
            match event {
                Ok(StreamEvent::TextDelta { delta }) => {
                    accumulated.push_str(&delta);
                    self.transcript.set_last_content(accumulated.clone());
                    let _ = self.event_tx.send(SessionEvent::text_delta(delta)).await;
                }
                Ok(StreamEvent::Finish { usage }) => {
                    debug!(
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        "stream finished"
                    );
                }
                Err(e) => return self.fail_turn(e.to_string()).await,
            }
        }

        self.busy = false;
        self.set_status(SessionStatus::Idle).await;
        let _ = self.event_tx.send(SessionEvent::turn_end()).await;
        TurnOutcome::Success
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn page_context(&self) -> &PageContext {
        &self.page_context
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Append the fixed greeting once, after the first successful read of
    /// a fresh session.
    async fn maybe_greet(&mut self) {
        if self.greeted || !self.transcript.is_empty() {
            return;
        }
        self.greeted = true;

        let greeting = self.config.greeting.clone();
        self.transcript.push(Message::assistant(greeting.clone()));
        let _ = self
            .event_tx
            .send(SessionEvent::turn_start(Role::Assistant))
            .await;
        let _ = self.event_tx.send(SessionEvent::text_delta(greeting)).await;
        let _ = self.event_tx.send(SessionEvent::turn_end()).await;
    }

    /// Error transition: fold the fault into the transcript, clear the
    /// busy flag, and return the engine to an interactive state.
    async fn fail_turn(&mut self, message: String) -> TurnOutcome {
        warn!(error = %message, "turn failed");
        let error_text = format!("Error: {message}");

        // An untouched placeholder is overwritten; partial streamed
        // content stays and the error arrives as a new message.
        let placeholder_empty = self.transcript.ends_with_assistant()
            && self
                .transcript
                .last()
                .map(|m| m.content.is_empty())
                .unwrap_or(false);
        if placeholder_empty {
            self.transcript.set_last_content(error_text);
        } else {
            self.transcript.push(Message::assistant(error_text));
        }

        self.busy = false;
        self.set_status(SessionStatus::error(message.clone())).await;
        let _ = self.event_tx.send(SessionEvent::error(message)).await;
        let _ = self.event_tx.send(SessionEvent::turn_end()).await;
        TurnOutcome::Failed
    }

    async fn set_status(&mut self, status: SessionStatus) {
        self.status = status.clone();
        let _ = self
            .event_tx
            .send(SessionEvent::status_changed(status))
            .await;
    }
}
