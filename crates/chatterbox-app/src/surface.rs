//! Terminal implementation of the chat surface.

use std::io::Write;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

use chatterbox_core::{Message, Sender};
use chatterbox_session::{ChatSurface, SurfaceError};

/// Renders the conversation on stdout and honors the session's side-effect
/// requests: typing indicator, bell as the notification cue, y/N clear
/// prompt, and export files written to the working directory.
pub struct TerminalSurface {
    bot_name: String,
}

impl TerminalSurface {
    pub fn new(bot_name: String) -> Self {
        Self { bot_name }
    }
}

#[async_trait]
impl ChatSurface for TerminalSurface {
    async fn message_posted(&self, message: &Message) {
        let label = match message.sender {
            Sender::User => "You",
            Sender::Bot => self.bot_name.as_str(),
        };
        println!(
            "[{}] {}: {}",
            format_clock(message.timestamp_ms),
            label,
            message.text
        );
    }

    async fn typing_changed(&self, active: bool) {
        if active {
            println!("{} is typing...", self.bot_name);
        }
    }

    async fn play_notification(&self) -> Result<(), SurfaceError> {
        // Terminal bell; some emulators silently drop it, which is fine.
        print!("\x07");
        std::io::stdout()
            .flush()
            .map_err(|e| SurfaceError::Audio(e.to_string()))
    }

    async fn confirm_clear(&self) -> bool {
        print!("Clear the conversation history? [y/N] ");
        let _ = std::io::stdout().flush();
        matches!(
            read_line().await.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        )
    }

    async fn offer_download(&self, file_name: &str, contents: &str) {
        match tokio::fs::write(file_name, contents).await {
            Ok(()) => println!("Conversation exported to {}", file_name),
            Err(e) => tracing::warn!(error = %e, file_name, "Failed to write export file"),
        }
    }
}

/// Read one line from stdin without blocking the runtime.
///
/// Returns `None` on EOF or read failure.
pub async fn read_line() -> Option<String> {
    tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        match std::io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf),
            Err(_) => None,
        }
    })
    .await
    .ok()
    .flatten()
}

/// Short local clock reading for message bubbles.
fn format_clock(epoch_ms: i64) -> String {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
