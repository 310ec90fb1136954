//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `keeper-core` (pure Rust).
//! Implementations live in `keeper-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use keeper_types::{
    Result,
    api::{ChatReply, ChatTurnRequest, HealthStatus},
    dashboard::{DashboardStat, TimelineEvent},
    story::{StoryDetail, StorySummary},
};

// ─── Backend Port ────────────────────────────────────────────

/// The Memory Keeper REST API.
///
/// Any transport failure, non-2xx status or undecodable body is an `Err`.
/// `story` reports a 404 as `KeeperError::NotFound`.
#[async_trait(?Send)]
pub trait BackendPort {
    /// `POST /api/v1/chat/send`
    async fn send_chat(&self, req: ChatTurnRequest) -> Result<ChatReply>;

    /// `POST /api/v1/chat/save`
    async fn save_session(&self, req: ChatTurnRequest) -> Result<()>;

    /// `GET /api/v1/stories`
    async fn stories(&self) -> Result<Vec<StorySummary>>;

    /// `GET /api/v1/dashboard/stats`
    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>>;

    /// `GET /api/v1/dashboard/timeline`
    async fn timeline(&self) -> Result<Vec<TimelineEvent>>;

    /// `GET /api/v1/stories/{id}`
    async fn story(&self, id: &str) -> Result<StoryDetail>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    /// Suspend the calling task for `ms` milliseconds
    async fn sleep(&self, ms: u32);
}
