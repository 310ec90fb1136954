//! Finalize pipeline: persist the session as a story and leave the chat.

use std::rc::Rc;

use keeper_types::{
    api::ChatTurnRequest,
    route::Route,
    session::SessionContext,
};

use crate::chat::ChatHandle;
use crate::event_bus::EventBus;
use crate::ports::BackendPort;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save story. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// A save was already in flight
    Ignored,
    /// Saved; navigation to the archive was requested
    Saved,
    /// Save failed; the user was notified and may retry
    Failed,
}

pub struct FinalizePipeline {
    backend: Rc<dyn BackendPort>,
    session: SessionContext,
    bus: EventBus,
}

impl FinalizePipeline {
    pub fn new(session: SessionContext, backend: Rc<dyn BackendPort>, bus: EventBus) -> Self {
        Self {
            backend,
            session,
            bus,
        }
    }

    pub async fn finalize(&self, chat: &ChatHandle) -> FinalizeOutcome {
        {
            let mut chat = chat.borrow_mut();
            if chat.is_saving() {
                log::debug!("Finalize ignored, save already in progress");
                return FinalizeOutcome::Ignored;
            }
            chat.set_saving(true);
        }

        match self
            .backend
            .save_session(ChatTurnRequest::save(self.session.id()))
            .await
        {
            Ok(()) => {
                // saving stays raised; leaving the view discards the session
                log::info!("Session {} saved", self.session.id());
                self.bus.navigate(Route::Dashboard);
                FinalizeOutcome::Saved
            }
            Err(e) => {
                log::error!("Failed to save session {}: {}", self.session.id(), e);
                chat.borrow_mut().set_saving(false);
                self.bus.notify(SAVE_FAILED_MESSAGE);
                FinalizeOutcome::Failed
            }
        }
    }
}
