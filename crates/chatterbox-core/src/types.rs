//! Shared data types for the Chatterbox conversational core.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Sender
// =============================================================================

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human on the other side of the surface.
    User,
    /// The bot itself.
    Bot,
}

// =============================================================================
// Message
// =============================================================================

/// A single entry in the conversation history.
///
/// Immutable once created; messages leave the history only through a
/// wholesale clear, never individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Message text, non-empty after trimming.
    pub text: String,
    /// Who authored the message.
    pub sender: Sender,
    /// Creation instant as epoch milliseconds. The core stores raw instants;
    /// locale formatting is deferred to the surface and the export renderer.
    pub timestamp_ms: i64,
}

impl Message {
    /// Create a message stamped with the current instant.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp_ms: Local::now().timestamp_millis(),
        }
    }

    /// Create a user message stamped with the current instant.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    /// Create a bot message stamped with the current instant.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }
}

// =============================================================================
// TurnState
// =============================================================================

/// Single-flag turn guard.
///
/// While a bot reply is pending no further submission is accepted; late
/// submissions are rejected, never queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// No turn in flight; submissions are accepted.
    #[default]
    Idle,
    /// A user message was accepted and its bot reply has not landed yet.
    AwaitingBotReply,
}

// =============================================================================
// Theme
// =============================================================================

/// Light/dark display preference.
///
/// A surface-side concern; the core only models the value so the boundary
/// can reflect and toggle it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
