use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeeperError;
use crate::session::SessionContext;

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
    pub session_id: String,
    pub fallback_delay_ms: u32,
    pub fallback_reply: String,
    pub welcome_message: String,
    pub fallback_policy: FallbackPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            fallback_policy: FallbackPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn session(&self) -> SessionContext {
        SessionContext::new(self.session_id.clone())
    }

    /// Replace the API base, dropping any trailing slash.
    /// Blank values leave the current base untouched.
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            self.api_base = base.to_string();
        }
        self
    }
}

/// How the send pipeline substitutes the canned reply when the backend fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// The thinking indicator clears when the request settles; the fallback
    /// reply is appended after the delay, once the indicator is already gone.
    #[default]
    Decoupled,
    /// The request races the delay. Whichever finishes first decides the
    /// reply, a late backend answer is dropped, and the indicator clears only
    /// after the reply is appended.
    Raced,
}

impl FallbackPolicy {
    pub fn label(&self) -> &str {
        match self {
            FallbackPolicy::Decoupled => "Decoupled",
            FallbackPolicy::Raced => "Raced",
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = KeeperError;

    /// Case-insensitive, as typed into the `?fallback=` query parameter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decoupled" => Ok(FallbackPolicy::Decoupled),
            "raced" => Ok(FallbackPolicy::Raced),
            other => Err(KeeperError::Config(format!(
                "unknown fallback policy '{}'",
                other
            ))),
        }
    }
}

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_SESSION_ID: &str = "demo_user";
const DEFAULT_FALLBACK_DELAY_MS: u32 = 1500;

pub const DEFAULT_FALLBACK_REPLY: &str = "That sounds like a beautiful memory. Could you tell me more about who was with you at that time?";

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to your personal memory vault. I'm honored to help you preserve your life's journey. What moment from your past is on your mind today?";
