use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn label(&self) -> &str {
        match self {
            Sender::User => "You",
            Sender::Ai => "Memory Keeper",
        }
    }
}

/// A single turn in the intake conversation.
/// Immutable once appended to the message store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn is_ai(&self) -> bool {
        self.sender == Sender::Ai
    }

    /// Short clock label used under each bubble, e.g. `14:05`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
