//! The narrow boundary the session talks to.
//!
//! Rendering, the typing indicator, the notification cue, clear
//! confirmation, and downloads are collaborator responsibilities; the
//! session only calls through this trait and never inspects how the calls
//! are honored.

use async_trait::async_trait;
use thiserror::Error;

use chatterbox_core::Message;

/// Failures reported by a surface implementation.
///
/// Only the notification cue is fallible from the session's point of view,
/// and the session swallows those failures.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("audio error: {0}")]
    Audio(String),
}

/// Presentation and side-effect boundary for a conversation session.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// A message was appended to the history; render it.
    async fn message_posted(&self, message: &Message);

    /// The typing indicator turned on or off.
    async fn typing_changed(&self, active: bool);

    /// Play the notification cue. Best-effort: the session logs failures
    /// and carries on.
    async fn play_notification(&self) -> Result<(), SurfaceError>;

    /// Ask whether the history should really be cleared.
    async fn confirm_clear(&self) -> bool;

    /// Offer an export artifact under the given file name.
    async fn offer_download(&self, file_name: &str, contents: &str);
}
