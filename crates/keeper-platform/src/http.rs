//! REST adapter for the Memory Keeper backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility.
//! No authentication header is sent; the session is identified in the body.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use keeper_core::ports::BackendPort;
use keeper_types::{
    KeeperError, Result,
    api::{self, ChatReply, ChatTurnRequest, HealthStatus},
    config::ClientConfig,
    dashboard::{DashboardStat, TimelineEvent},
    story::{StoryDetail, StorySummary},
};

pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| KeeperError::Network(e.to_string()))?;

        let response = check_status(&url, response).await?;
        response
            .json()
            .await
            .map_err(|e| KeeperError::Serialization(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &ChatTurnRequest) -> Result<Response> {
        let url = self.endpoint(path);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| KeeperError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| KeeperError::Network(e.to_string()))?;

        check_status(&url, response).await
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn send_chat(&self, req: ChatTurnRequest) -> Result<ChatReply> {
        let response = self.post_json(api::CHAT_SEND_PATH, &req).await?;
        response
            .json()
            .await
            .map_err(|e| KeeperError::Serialization(e.to_string()))
    }

    async fn save_session(&self, req: ChatTurnRequest) -> Result<()> {
        self.post_json(api::CHAT_SAVE_PATH, &req).await?;
        Ok(())
    }

    async fn stories(&self) -> Result<Vec<StorySummary>> {
        self.get_json(api::STORIES_PATH).await
    }

    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>> {
        self.get_json(api::STATS_PATH).await
    }

    async fn timeline(&self) -> Result<Vec<TimelineEvent>> {
        self.get_json(api::TIMELINE_PATH).await
    }

    async fn story(&self, id: &str) -> Result<StoryDetail> {
        self.get_json(&api::story_path(id)).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json(api::HEALTH_PATH).await
    }
}

/// Turn a non-2xx response into an error. 404 becomes `NotFound`.
async fn check_status(url: &str, response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    if status == 404 {
        return Err(KeeperError::NotFound(url.to_string()));
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(KeeperError::Http {
        status,
        message: error_detail(&text),
    })
}

/// FastAPI error bodies look like `{"detail": "..."}`; fall back to the raw text.
pub fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["detail"].as_str().map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
