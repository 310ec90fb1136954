use serde::{Deserialize, Serialize};

/// A story as listed in the archive.
/// The list endpoint also sends `content`; it is ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySummary {
    pub id: String,
    pub title: String,
    pub date: String,
    pub duration: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A single story with its full text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDetail {
    #[serde(flatten)]
    pub summary: StorySummary,
    pub content: String,
}

impl StoryDetail {
    pub fn title(&self) -> &str {
        &self.summary.title
    }
}
