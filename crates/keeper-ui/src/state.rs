//! UI-level state that drives rendering.
//!
//! Pipeline data lives in `keeper-core` views; this is the navigation and
//! notification layer around them, updated each frame by draining the EventBus.

use keeper_types::event::KeeperEvent;
use keeper_types::route::Route;

pub struct UiState {
    /// Visible view
    pub route: Route,
    /// Blocking notification awaiting dismissal
    pub notification: Option<String>,
    /// The chat timeline should scroll to its end on the next frame
    pub scroll_pending: bool,
}

impl UiState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            notification: None,
            scroll_pending: false,
        }
    }

    /// Apply drained events. Returns the new route if the view changed.
    pub fn process_events(&mut self, events: Vec<KeeperEvent>) -> Option<Route> {
        let mut changed = None;
        for event in events {
            match event {
                KeeperEvent::ScrollToBottom => {
                    self.scroll_pending = true;
                }
                KeeperEvent::Navigate { route } => {
                    if self.navigate(route.clone()) {
                        changed = Some(route);
                    }
                }
                KeeperEvent::Notify { message } => {
                    log::info!("Notification: {}", message);
                    self.notification = Some(message);
                }
            }
        }
        changed
    }

    /// Switch views. Returns false if `route` is already showing.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        self.route = route;
        self.scroll_pending = matches!(self.route, Route::Chat);
        true
    }

    /// Consume the scroll request
    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn is_blocked(&self) -> bool {
        self.notification.is_some()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Route::default())
    }
}
