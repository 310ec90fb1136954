//! Main egui application: owns the views, mounts them on navigation and
//! runs pipeline calls on the browser event loop.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use keeper_core::chat::{ChatHandle, ChatSession};
use keeper_core::dashboard::{DashboardAggregator, DashboardHandle, DashboardView};
use keeper_core::event_bus::EventBus;
use keeper_core::finalize::FinalizePipeline;
use keeper_core::ports::{BackendPort, TimerPort};
use keeper_core::send::SendPipeline;
use keeper_core::story::{StoryDetailLoader, StoryHandle, StoryView};
use keeper_platform::location;
use keeper_platform::{BrowserTimer, HttpBackend};
use keeper_types::config::{ClientConfig, FallbackPolicy};
use keeper_types::route::Route;
use keeper_ui::panels::chat::{self, ChatAction};
use keeper_ui::panels::{dashboard, notice, story};
use keeper_ui::state::UiState;
use keeper_ui::theme;

/// Query parameter overriding `ClientConfig::api_base`
const API_PARAM: &str = "api";
/// Query parameter selecting the fallback policy (`raced` or `decoupled`)
const FALLBACK_PARAM: &str = "fallback";

pub struct KeeperApp {
    ui_state: UiState,
    config: ClientConfig,
    event_bus: EventBus,
    backend: Rc<dyn BackendPort>,
    send: Rc<SendPipeline>,
    finalize: Rc<FinalizePipeline>,
    aggregator: Rc<DashboardAggregator>,
    loader: Rc<StoryDetailLoader>,
    chat: Option<ChatHandle>,
    dashboard: DashboardHandle,
    story: Option<StoryHandle>,
    /// Route reported by a back/forward navigation, applied on the next frame
    popped: Rc<RefCell<Option<Route>>>,
    first_frame: bool,
}

impl KeeperApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Self::load_config();
        log::info!(
            "API base {} (session {}, fallback {})",
            config.api_base,
            config.session_id,
            config.fallback_policy.label()
        );

        let event_bus = EventBus::new();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(&config));
        let timer: Rc<dyn TimerPort> = Rc::new(BrowserTimer);

        let send = Rc::new(SendPipeline::new(&config, backend.clone(), timer));
        let finalize = Rc::new(FinalizePipeline::new(
            config.session(),
            backend.clone(),
            event_bus.clone(),
        ));
        let aggregator = Rc::new(DashboardAggregator::new(backend.clone()));
        let loader = Rc::new(StoryDetailLoader::new(backend.clone()));

        let route = location::canonical_route();
        let mut app = Self {
            ui_state: UiState::new(route.clone()),
            config,
            event_bus,
            backend,
            send,
            finalize,
            aggregator,
            loader,
            chat: None,
            dashboard: DashboardView::shared(),
            story: None,
            popped: Rc::new(RefCell::new(None)),
            first_frame: true,
        };

        app.listen_history(&cc.egui_ctx);
        app.check_health();
        app.mount(&route, &cc.egui_ctx);
        app
    }

    /// Defaults plus the query-string overrides
    fn load_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(api) = location::query_param(API_PARAM) {
            config = config.with_api_base(&api);
        }
        if let Some(policy) = location::query_param(FALLBACK_PARAM) {
            match policy.parse::<FallbackPolicy>() {
                Ok(policy) => config.fallback_policy = policy,
                Err(e) => log::warn!("{}, keeping default", e),
            }
        }
        config
    }

    /// Back/forward already moved the address bar; only the view follows
    fn listen_history(&self, ctx: &egui::Context) {
        let slot = self.popped.clone();
        let ctx = ctx.clone();
        let result = location::on_popstate(move |route| {
            *slot.borrow_mut() = Some(route);
            ctx.request_repaint();
        });
        if let Err(e) = result {
            log::warn!("Back/forward navigation unavailable: {}", e);
        }
    }

    /// One-shot startup check; the result is only logged
    fn check_health(&self) {
        let backend = self.backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match backend.health().await {
                Ok(status) if status.is_healthy() => log::info!("Backend healthy"),
                Ok(status) => log::warn!("Backend reports status '{}'", status.status),
                Err(e) => log::warn!("Backend health check failed: {}", e),
            }
        });
    }

    /// Build the state for a freshly shown view and start its loads
    fn mount(&mut self, route: &Route, ctx: &egui::Context) {
        log::info!("Showing {}", route.label());
        self.chat = None;
        self.story = None;

        match route {
            Route::Chat => {
                self.chat = Some(ChatSession::shared(
                    &self.config.welcome_message,
                    self.event_bus.clone(),
                ));
            }
            Route::Dashboard => {
                let aggregator = self.aggregator.clone();
                let view = self.dashboard.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    aggregator.load(&view).await;
                    ctx.request_repaint();
                });
            }
            Route::Story { id } => {
                let view = StoryView::shared();
                self.story = Some(view.clone());
                let loader = self.loader.clone();
                let id = id.clone();
                let ctx = ctx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    loader.load(&id, &view).await;
                    ctx.request_repaint();
                });
            }
        }
    }

    /// Switch to `route` from a UI link
    fn go(&mut self, route: Route, ctx: &egui::Context) {
        if self.ui_state.navigate(route.clone()) {
            self.on_route_changed(&route, ctx);
        }
    }

    fn on_route_changed(&mut self, route: &Route, ctx: &egui::Context) {
        if let Err(e) = location::push_route(route) {
            log::warn!("Could not update browser history: {}", e);
        }
        self.mount(route, ctx);
    }

    fn dispatch_send(&self, chat: ChatHandle, ctx: &egui::Context) {
        let send = self.send.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = send.send(&chat).await;
            log::debug!("Send finished: {:?}", outcome);
            ctx.request_repaint();
        });
    }

    fn dispatch_finalize(&self, chat: ChatHandle, ctx: &egui::Context) {
        let finalize = self.finalize.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = finalize.finalize(&chat).await;
            log::debug!("Finalize finished: {:?}", outcome);
            ctx.request_repaint();
        });
    }

    fn is_busy(&self) -> bool {
        let chat_busy = self
            .chat
            .as_ref()
            .map(|c| {
                let c = c.borrow();
                c.is_thinking() || c.is_saving()
            })
            .unwrap_or(false);
        let story_busy = self
            .story
            .as_ref()
            .map(|s| s.borrow().is_loading())
            .unwrap_or(false);
        chat_busy || story_busy || self.dashboard.borrow().is_loading()
    }
}

impl eframe::App for KeeperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let popped = self.popped.borrow_mut().take();
        if let Some(route) = popped {
            if self.ui_state.navigate(route.clone()) {
                self.mount(&route, ctx);
            }
        }

        // Drain events from the pipelines
        let events = self.event_bus.drain();
        if !events.is_empty() {
            if let Some(route) = self.ui_state.process_events(events) {
                self.on_route_changed(&route, ctx);
            }
            ctx.request_repaint();
        }

        if self.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        let mut nav = None;
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Memory Keeper")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                for route in [Route::Chat, Route::Dashboard] {
                    let selected = self.ui_state.route == route;
                    if ui.selectable_label(selected, route.label()).clicked() {
                        nav = Some(route);
                    }
                }
            });
        });

        // ── Main content ─────────────────────────────────────
        let blocked = self.ui_state.is_blocked();
        let scroll = self.ui_state.take_scroll();
        let mut chat_action = None;
        CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| match &self.ui_state.route {
                Route::Chat => {
                    if let Some(handle) = &self.chat {
                        let mut session = handle.borrow_mut();
                        chat_action = chat::chat_panel(ui, &mut session, scroll);
                    }
                }
                Route::Dashboard => {
                    if let Some(route) = dashboard::dashboard_panel(ui, &self.dashboard.borrow()) {
                        nav = Some(route);
                    }
                }
                Route::Story { .. } => {
                    if let Some(handle) = &self.story {
                        if let Some(route) = story::story_panel(ui, &handle.borrow()) {
                            nav = Some(route);
                        }
                    }
                }
            });
        });

        notice::notice_window(ctx, &mut self.ui_state);

        if let (Some(action), Some(handle)) = (chat_action, self.chat.clone()) {
            match action {
                ChatAction::Send => self.dispatch_send(handle, ctx),
                ChatAction::Finalize => self.dispatch_finalize(handle, ctx),
            }
        }

        if let Some(route) = nav {
            self.go(route, ctx);
        }
    }
}
