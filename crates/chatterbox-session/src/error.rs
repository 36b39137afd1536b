//! Error types for the conversation session.

use thiserror::Error;

/// Rejections surfaced to the boundary.
///
/// All variants are local, expected, recoverable conditions meant for
/// user-visible feedback; none is fatal and none triggers retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a bot reply is already pending")]
    ReplyPending,
    #[error("no messages to export")]
    EmptyHistory,
}
