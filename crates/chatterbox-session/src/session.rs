//! The conversation session: history, turn sequencing, clear and export.

use std::time::Duration;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use chatterbox_core::{ChatterboxConfig, Message, TurnState};
use chatterbox_engine::ResponseEngine;

use crate::error::SessionError;
use crate::surface::ChatSurface;
use crate::transcript;

/// State guarded by the session mutex.
///
/// The lock is never held across an await; the typing sleep happens with
/// the state released so the surface stays responsive.
struct SessionState {
    history: Vec<Message>,
    turn_state: TurnState,
    rng: StdRng,
}

/// A single conversation: ordered history, one-turn-at-a-time sequencing,
/// and the clear/export operations.
///
/// The session owns the history exclusively. At most one turn is in flight;
/// a submission while a bot reply is pending is rejected, never queued, and
/// an accepted turn cannot be cancelled.
pub struct ConversationSession<S: ChatSurface> {
    engine: ResponseEngine,
    surface: S,
    bot_name: String,
    delay_min_ms: u64,
    delay_max_ms: u64,
    state: Mutex<SessionState>,
}

impl<S: ChatSurface> ConversationSession<S> {
    /// Create a session wired to a real entropy source.
    pub fn new(engine: ResponseEngine, surface: S, config: &ChatterboxConfig) -> Self {
        Self::with_rng(engine, surface, config, StdRng::from_entropy())
    }

    /// Create a session with a caller-supplied random source.
    ///
    /// Tests pass a seeded `StdRng` to make reply selection and the typing
    /// delay deterministic.
    pub fn with_rng(
        engine: ResponseEngine,
        surface: S,
        config: &ChatterboxConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            engine,
            surface,
            bot_name: config.bot.name.clone(),
            delay_min_ms: config.typing.min_delay_ms,
            delay_max_ms: config.typing.max_delay_ms,
            state: Mutex::new(SessionState {
                history: Vec::new(),
                turn_state: TurnState::Idle,
                rng,
            }),
        }
    }

    /// The bot's display name.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Snapshot of the current history in insertion order.
    pub async fn history(&self) -> Vec<Message> {
        self.state.lock().await.history.clone()
    }

    /// Current turn state.
    pub async fn turn_state(&self) -> TurnState {
        self.state.lock().await.turn_state
    }

    /// Run one conversation turn.
    ///
    /// Rejects blank input and submissions while a reply is pending. On
    /// acceptance: records the user message, turns the typing indicator on,
    /// sleeps for a delay drawn uniformly from the configured window,
    /// records and posts the bot reply, then fires the notification cue
    /// best-effort. Returns the bot message.
    pub async fn submit(&self, text: &str) -> Result<Message, SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let (user_message, delay_ms) = {
            let mut state = self.state.lock().await;
            if state.turn_state == TurnState::AwaitingBotReply {
                return Err(SessionError::ReplyPending);
            }
            state.turn_state = TurnState::AwaitingBotReply;
            let message = Message::user(trimmed);
            state.history.push(message.clone());
            let delay_ms = state.rng.gen_range(self.delay_min_ms..self.delay_max_ms);
            (message, delay_ms)
        };

        tracing::debug!(delay_ms, text_len = trimmed.len(), "turn accepted");
        self.surface.message_posted(&user_message).await;
        self.surface.typing_changed(true).await;

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let bot_message = {
            let mut state = self.state.lock().await;
            let reply = self.engine.respond(trimmed, &mut state.rng);
            let message = Message::bot(reply);
            state.history.push(message.clone());
            state.turn_state = TurnState::Idle;
            message
        };

        self.surface.typing_changed(false).await;
        self.surface.message_posted(&bot_message).await;

        if let Err(e) = self.surface.play_notification().await {
            // Best-effort cue; a silent turn still completes.
            tracing::debug!(error = %e, "notification cue failed");
        }

        Ok(bot_message)
    }

    /// Clear the history, gated on the surface's confirmation.
    ///
    /// The yes/no decision is external; the session never decides it.
    /// Returns whether the history was actually cleared. The turn state is
    /// untouched either way.
    pub async fn clear(&self) -> bool {
        if !self.surface.confirm_clear().await {
            tracing::debug!("clear declined by surface");
            return false;
        }
        let mut state = self.state.lock().await;
        let removed = state.history.len();
        state.history.clear();
        tracing::info!(removed, "conversation history cleared");
        true
    }

    /// Render the export transcript.
    pub async fn export(&self) -> Result<String, SessionError> {
        let state = self.state.lock().await;
        if state.history.is_empty() {
            return Err(SessionError::EmptyHistory);
        }
        Ok(transcript::render(&state.history, &self.bot_name))
    }

    /// Render the transcript and offer it to the surface as a download.
    ///
    /// Returns the offered file name.
    pub async fn export_to_surface(&self) -> Result<String, SessionError> {
        let contents = self.export().await?;
        let file_name = transcript::file_name(Local::now().date_naive());
        self.surface.offer_download(&file_name, &contents).await;
        Ok(file_name)
    }
}

// =============================================================================
// Tests
// =============================================================================
