//! Pipeline-to-UI notifications.
//!
//! Pipelines post [`KeeperEvent`]s while they run; the app drains the queue
//! once per frame. A scroll request is only queued when none is pending,
//! since the next frame scrolls once no matter how many turns landed.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use keeper_types::event::KeeperEvent;
use keeper_types::route::Route;

/// Shared queue handle; clones post into the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<KeeperEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: KeeperEvent) {
        let mut queue = self.queue.borrow_mut();
        if event == KeeperEvent::ScrollToBottom && queue.contains(&event) {
            return;
        }
        queue.push_back(event);
    }

    /// The chat timeline changed and should show its newest entry
    pub fn request_scroll(&self) {
        self.emit(KeeperEvent::ScrollToBottom);
    }

    pub fn navigate(&self, route: Route) {
        self.emit(KeeperEvent::Navigate { route });
    }

    /// Blocking notice the user has to dismiss
    pub fn notify(&self, message: impl Into<String>) {
        self.emit(KeeperEvent::Notify {
            message: message.into(),
        });
    }

    /// Everything posted since the last drain, oldest first
    pub fn drain(&self) -> Vec<KeeperEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
