//! Request and response bodies for the Memory Keeper REST API.

use serde::{Deserialize, Serialize};

pub const CHAT_SEND_PATH: &str = "/api/v1/chat/send";
pub const CHAT_SAVE_PATH: &str = "/api/v1/chat/save";
pub const STORIES_PATH: &str = "/api/v1/stories";
pub const STATS_PATH: &str = "/api/v1/dashboard/stats";
pub const TIMELINE_PATH: &str = "/api/v1/dashboard/timeline";
pub const HEALTH_PATH: &str = "/health";

/// Text sent with a save request. The backend persists its own
/// session state and ignores this value.
pub const SAVE_SENTINEL: &str = "[finalize]";

pub fn story_path(id: &str) -> String {
    format!("{}/{}", STORIES_PATH, id)
}

/// Body of both `chat/send` and `chat/save`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub text: String,
    pub session_id: String,
}

impl ChatTurnRequest {
    pub fn new(text: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            session_id: session_id.into(),
        }
    }

    pub fn save(session_id: impl Into<String>) -> Self {
        Self::new(SAVE_SENTINEL, session_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
