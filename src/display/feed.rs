//! Notification and chat output

use crate::events::{EventLevel, TrackerEvent};
use crate::models::{ChatMessage, Currency};

fn level_tag(level: EventLevel) -> &'static str {
    match level {
        EventLevel::Info => "[info]",
        EventLevel::Success => "[ok]",
        EventLevel::Warning => "[warn]",
        EventLevel::Error => "[error]",
    }
}

/// Format one notification: `[warn] Budget Warning: You're approaching ...`
pub fn format_event(event: &TrackerEvent, currency: &Currency) -> String {
    format!(
        "{} {}: {}",
        level_tag(event.level()),
        event.title(),
        event.message(currency)
    )
}

pub fn format_transcript(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return "Ask me anything about budgeting, saving, or managing your expenses!".to_string();
    }

    messages
        .iter()
        .map(ChatMessage::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
