//! Chat message types for display

use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The digital twin
    Ai,
    User,
}

/// A message in the twin chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequential within a session, starting at 1
    pub id: u64,
    pub sender: Sender,
    pub body: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(id: u64, sender: Sender, body: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            sender,
            body: body.into(),
            timestamp,
        }
    }

    pub fn is_from_ai(&self) -> bool {
        self.sender == Sender::Ai
    }

    /// Wall-clock time as `HH:MM` in the local timezone.
    pub fn clock_time(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
