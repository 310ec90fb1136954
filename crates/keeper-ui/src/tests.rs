#[cfg(test)]
mod tests {
    use crate::panels::chat::chat_panel;
    use crate::panels::dashboard::dashboard_panel;
    use crate::panels::notice::notice_window;
    use crate::panels::story::story_panel;
    use crate::state::*;
    use crate::theme;
    use keeper_core::chat::ChatSession;
    use keeper_core::dashboard::{DashboardAggregator, DashboardView};
    use keeper_core::event_bus::EventBus;
    use keeper_core::ports::BackendPort;
    use keeper_core::story::{StoryDetailLoader, StoryStatus, StoryView};
    use keeper_types::api::{ChatReply, ChatTurnRequest, HealthStatus};
    use keeper_types::dashboard::{DashboardStat, StatValue, TimelineEvent};
    use keeper_types::event::KeeperEvent;
    use keeper_types::route::Route;
    use keeper_types::story::{StoryDetail, StorySummary};
    use keeper_types::{KeeperError, Result};

    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    /// Run one headless frame with a central panel and return every string drawn
    fn frame(mut body: impl FnMut(&mut egui::Ui)) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| body(ui));
        });
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut texts);
        }
        texts
    }

    fn collect_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect_text(shape, out);
                }
            }
            _ => {}
        }
    }

    fn drew(texts: &[String], needle: &str) -> bool {
        texts.iter().any(|t| t.contains(needle))
    }

    // ─── Stub backend ────────────────────────────────────────

    fn summary(id: &str, title: &str) -> StorySummary {
        StorySummary {
            id: id.to_string(),
            title: title.to_string(),
            date: "Mar 24, 2024".to_string(),
            duration: "12 mins".to_string(),
            topics: vec!["Childhood".to_string(), "Sea".to_string()],
            audio_url: Some("mock_audio.mp3".to_string()),
        }
    }

    /// Serves one archive; `story` answers every detail request
    struct StubBackend {
        story: Result<StoryDetail>,
    }

    #[async_trait(?Send)]
    impl BackendPort for StubBackend {
        async fn send_chat(&self, _req: ChatTurnRequest) -> Result<ChatReply> {
            Err(KeeperError::Other("unused".to_string()))
        }

        async fn save_session(&self, _req: ChatTurnRequest) -> Result<()> {
            Err(KeeperError::Other("unused".to_string()))
        }

        async fn stories(&self) -> Result<Vec<StorySummary>> {
            Ok(vec![summary("1", "Memories of the Old Dock")])
        }

        async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>> {
            Ok(vec![DashboardStat {
                label: "Stories Preserved".to_string(),
                value: StatValue::Text("12".to_string()),
                trend: "+2 this week".to_string(),
                color: "bg-sage-500".to_string(),
                icon: "Rocket".to_string(),
            }])
        }

        async fn timeline(&self) -> Result<Vec<TimelineEvent>> {
            Ok(vec![TimelineEvent {
                year: "1962".to_string(),
                title: "Moved to the coast".to_string(),
                desc: "The family settled by the bay".to_string(),
            }])
        }

        async fn story(&self, _id: &str) -> Result<StoryDetail> {
            self.story.clone()
        }

        async fn health(&self) -> Result<HealthStatus> {
            Ok(HealthStatus { status: "healthy".to_string() })
        }
    }

    fn found() -> StubBackend {
        StubBackend {
            story: Ok(StoryDetail {
                summary: summary("1", "Memories of the Old Dock"),
                content: "I remember the old dock down by the bay.".to_string(),
            }),
        }
    }

    fn missing() -> StubBackend {
        StubBackend {
            story: Err(KeeperError::NotFound("/api/v1/stories/99".to_string())),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::default();
        assert_eq!(state.route, Route::Chat);
        assert!(state.notification.is_none());
        assert!(!state.scroll_pending);
        assert!(!state.is_blocked());
    }

    #[test]
    fn test_ui_state_scroll_is_consumed_once() {
        let mut state = UiState::default();
        let changed = state.process_events(vec![
            KeeperEvent::ScrollToBottom,
            KeeperEvent::ScrollToBottom,
        ]);
        assert!(changed.is_none());
        assert!(state.take_scroll());
        assert!(!state.take_scroll());
    }

    #[test]
    fn test_ui_state_navigate_event() {
        let mut state = UiState::default();
        let changed = state.process_events(vec![KeeperEvent::Navigate {
            route: Route::Dashboard,
        }]);
        assert_eq!(changed, Some(Route::Dashboard));
        assert_eq!(state.route, Route::Dashboard);
    }

    #[test]
    fn test_ui_state_navigate_to_same_route_is_no_change() {
        let mut state = UiState::new(Route::Dashboard);
        let changed = state.process_events(vec![KeeperEvent::Navigate {
            route: Route::Dashboard,
        }]);
        assert!(changed.is_none());
        assert!(!state.navigate(Route::Dashboard));
    }

    #[test]
    fn test_ui_state_last_navigation_wins() {
        let mut state = UiState::default();
        let changed = state.process_events(vec![
            KeeperEvent::Navigate {
                route: Route::Dashboard,
            },
            KeeperEvent::Navigate {
                route: Route::Story { id: "7".into() },
            },
        ]);
        assert_eq!(changed, Some(Route::Story { id: "7".into() }));
        assert_eq!(state.route, Route::Story { id: "7".into() });
    }

    #[test]
    fn test_ui_state_returning_to_chat_scrolls() {
        let mut state = UiState::new(Route::Dashboard);
        assert!(state.navigate(Route::Chat));
        assert!(state.take_scroll());
    }

    #[test]
    fn test_ui_state_notify_blocks_until_dismissed() {
        let mut state = UiState::default();
        state.process_events(vec![KeeperEvent::Notify {
            message: "Failed to save story. Please try again.".into(),
        }]);
        assert!(state.is_blocked());
        assert_eq!(
            state.notification.as_deref(),
            Some("Failed to save story. Please try again.")
        );

        state.dismiss_notification();
        assert!(!state.is_blocked());
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_token_color_mapping() {
        assert_eq!(theme::token_color("bg-sage-500"), theme::SAGE);
        assert_eq!(theme::token_color("bg-rose-400"), theme::ROSE);
        assert_eq!(theme::token_color("bg-indigo-500"), theme::INDIGO);
        assert_eq!(theme::token_color("bg-brand"), theme::ACCENT);
        assert_eq!(theme::token_color(""), theme::ACCENT);
    }

    // ─── Panel Smoke Tests ───────────────────────────────────

    #[test]
    fn test_chat_panel_renders_without_action() {
        let mut chat = ChatSession::new("Hello there", EventBus::new());
        let mut action = None;
        frame(|ui| {
            action = chat_panel(ui, &mut chat, true);
        });
        assert!(action.is_none());
        assert_eq!(chat.len(), 1);
    }

    #[test]
    fn test_dashboard_panel_renders_empty_view() {
        let view = DashboardView::new();
        let mut target = None;
        let texts = frame(|ui| {
            target = dashboard_panel(ui, &view);
        });
        assert!(target.is_none());
        assert!(drew(&texts, "Nothing to show yet."));
    }

    #[test]
    fn test_dashboard_panel_draws_committed_snapshot() {
        let view = DashboardView::shared();
        let aggregator = DashboardAggregator::new(Rc::new(found()));
        assert!(block_on(aggregator.load(&view)));

        let view = view.borrow();
        let texts = frame(|ui| {
            dashboard_panel(ui, &view);
        });
        assert!(drew(&texts, "Stories Preserved"));
        assert!(drew(&texts, "12"));
        // unknown icon names draw the book glyph
        assert!(drew(&texts, "📖"));
        assert!(drew(&texts, "Memories of the Old Dock"));
        assert!(drew(&texts, "Childhood, Sea"));
        assert!(drew(&texts, "1962"));
        assert!(drew(&texts, "Moved to the coast"));
    }

    #[test]
    fn test_story_panel_renders_loading_view() {
        let view = StoryView::new();
        let mut target = None;
        let texts = frame(|ui| {
            target = story_panel(ui, &view);
        });
        assert!(target.is_none());
        assert!(drew(&texts, "Loading story..."));
        assert!(!drew(&texts, "Story not found."));
    }

    #[test]
    fn test_story_panel_draws_not_found() {
        let view = StoryView::shared();
        let loader = StoryDetailLoader::new(Rc::new(missing()));
        assert_eq!(block_on(loader.load("99", &view)), StoryStatus::NotFound);

        let view = view.borrow();
        let texts = frame(|ui| {
            story_panel(ui, &view);
        });
        assert!(drew(&texts, "Story not found."));
        assert!(!drew(&texts, "Loading story..."));
    }

    #[test]
    fn test_story_panel_draws_found_story() {
        let view = StoryView::shared();
        let loader = StoryDetailLoader::new(Rc::new(found()));
        assert_eq!(block_on(loader.load("1", &view)), StoryStatus::Found);

        let view = view.borrow();
        let texts = frame(|ui| {
            story_panel(ui, &view);
        });
        assert!(drew(&texts, "Memories of the Old Dock"));
        assert!(drew(&texts, "Mar 24, 2024"));
        assert!(drew(&texts, "Childhood, Sea"));
        assert!(drew(&texts, "Listen to the recording"));
        assert!(drew(&texts, "I remember the old dock"));
        assert!(!drew(&texts, "Story not found."));
    }

    #[test]
    fn test_notice_window_keeps_notification_without_click() {
        let mut state = UiState::default();
        state.notification = Some("Failed to save story. Please try again.".into());
        let ctx = egui::Context::default();
        theme::apply_theme(&ctx);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            notice_window(ctx, &mut state);
        });
        assert!(state.is_blocked());
    }
}
