use serde::{Deserialize, Serialize};

/// Identity of the single logical conversation.
/// Passed to every component that talks to the backend on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: String,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }
}
