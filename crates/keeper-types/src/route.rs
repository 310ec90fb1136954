use serde::{Deserialize, Serialize};

/// The three views of the client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    /// `/`: conversational intake
    #[default]
    Chat,
    /// `/dashboard`: the archive
    Dashboard,
    /// `/story/:id`
    Story { id: String },
}

impl Route {
    /// Resolve a location path. Anything unrecognised lands on the chat view.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["dashboard"] => Route::Dashboard,
            ["story", id] => Route::Story { id: id.to_string() },
            _ => Route::Chat,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Chat => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Story { id } => format!("/story/{}", id),
        }
    }

    /// Whether `path` already is the canonical spelling of the route it parses to.
    /// `/foo` and `/dashboard/` are not.
    pub fn is_canonical(path: &str) -> bool {
        Route::parse(path).path() == path
    }

    /// History entry for this route, carrying the page's query string
    /// (`search` is empty or starts with `?`)
    pub fn url_with_search(&self, search: &str) -> String {
        format!("{}{}", self.path(), search)
    }

    pub fn label(&self) -> &str {
        match self {
            Route::Chat => "Converse",
            Route::Dashboard => "Exploration",
            Route::Story { .. } => "Story",
        }
    }
}
