use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum KeeperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeout after {0}ms")]
    Timeout(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl KeeperError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeeperError::NotFound(_))
    }
}

impl From<serde_json::Error> for KeeperError {
    fn from(e: serde_json::Error) -> Self {
        KeeperError::Serialization(e.to_string())
    }
}
