//! Plain-text transcript rendering for history export.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use chatterbox_core::{Message, Sender};

/// Render the deterministic export transcript.
///
/// Two header lines, then one `"<label> (<local timestamp>): <text>"` line
/// per message in insertion order, each followed by a blank line. The label
/// is "You" for the user and the bot's display name for the bot.
pub fn render(history: &[Message], bot_name: &str) -> String {
    let mut out = String::new();
    out.push_str(bot_name);
    out.push_str(" Conversation Export\n");
    out.push_str("================================\n\n");

    for message in history {
        let label = match message.sender {
            Sender::User => "You",
            Sender::Bot => bot_name,
        };
        out.push_str(&format!(
            "{} ({}): {}\n\n",
            label,
            format_timestamp(message.timestamp_ms),
            message.text
        ));
    }

    out
}

/// File name offered for the export artifact.
pub fn file_name(date: NaiveDate) -> String {
    format!("chatbot-conversation-{}.txt", date.format("%Y-%m-%d"))
}

/// Format epoch milliseconds in local time.
fn format_timestamp(epoch_ms: i64) -> String {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_ms.to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn message(text: &str, sender: Sender, ts: i64) -> Message {
        Message {
            id: Uuid::new_v4(),
            text: text.to_string(),
            sender,
            timestamp_ms: ts,
        }
    }

    #[test]
    fn test_render_header() {
        let out = render(&[], "ChatBot");
        assert!(out.starts_with("ChatBot Conversation Export\n"));
        assert!(out.contains("================================\n\n"));
    }

    #[test]
    fn test_render_two_messages_in_order() {
        let history = vec![
            message("hi", Sender::User, 1_700_000_000_000),
            message("Hello!", Sender::Bot, 1_700_000_002_000),
        ];
        let out = render(&history, "ChatBot");

        let you = out.find("You (").unwrap();
        let bot = out.find("ChatBot (").unwrap();
        assert!(you < bot, "user line must precede bot line");
        assert!(out.contains("): hi\n\n"));
        assert!(out.contains("): Hello!\n\n"));
        // Exactly one user line and one bot message line.
        assert_eq!(out.matches("You (").count(), 1);
        assert_eq!(out.matches("ChatBot (").count(), 1);
    }

    #[test]
    fn test_render_uses_custom_bot_name() {
        let history = vec![message("Right away!", Sender::Bot, 1_700_000_000_000)];
        let out = render(&history, "Parrot");
        assert!(out.starts_with("Parrot Conversation Export"));
        assert!(out.contains("Parrot ("));
        assert!(!out.contains("ChatBot"));
    }

    #[test]
    fn test_render_blank_line_after_each_entry() {
        let history = vec![
            message("one", Sender::User, 1_700_000_000_000),
            message("two", Sender::Bot, 1_700_000_001_000),
        ];
        let out = render(&history, "ChatBot");
        assert!(out.ends_with("\n\n"));
        // Header blank line plus one per message.
        assert_eq!(out.matches("\n\n").count(), 3);
    }

    #[test]
    fn test_timestamp_is_formatted_not_raw() {
        let history = vec![message("hi", Sender::User, 1_700_000_000_000)];
        let out = render(&history, "ChatBot");
        assert!(!out.contains("1700000000000"));
        assert!(out.contains("-")); // date separator
    }

    #[test]
    fn test_file_name_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(file_name(date), "chatbot-conversation-2026-08-30.txt");
    }

    #[test]
    fn test_file_name_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(file_name(date), "chatbot-conversation-2026-01-05.txt");
    }
}
