//! Conversation session management for Chatterbox.
//!
//! Owns the ordered message history and the turn sequence: an accepted user
//! message, a simulated typing delay, then the bot reply. Presentation,
//! audio, confirmation prompts, and downloads happen behind the narrow
//! [`ChatSurface`] boundary.

pub mod error;
pub mod session;
pub mod surface;
pub mod transcript;

pub use error::SessionError;
pub use session::ConversationSession;
pub use surface::{ChatSurface, SurfaceError};
