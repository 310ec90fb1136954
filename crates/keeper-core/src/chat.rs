//! State of one intake conversation.
//!
//! A `ChatSession` is created when the chat view mounts and dropped when the
//! view is left. Pipelines hold it through a [`ChatHandle`] and never keep a
//! borrow across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use keeper_types::message::{Message, Sender};

use crate::event_bus::EventBus;
use crate::message_store::MessageStore;

pub type ChatHandle = Rc<RefCell<ChatSession>>;

pub struct ChatSession {
    store: MessageStore,
    input: String,
    thinking: bool,
    saving: bool,
    bus: EventBus,
}

impl ChatSession {
    /// Start a session seeded with the assistant's welcome message
    pub fn new(welcome: &str, bus: EventBus) -> Self {
        let mut store = MessageStore::new();
        store.append(Sender::Ai, welcome);
        Self {
            store,
            input: String::new(),
            thinking: false,
            saving: false,
            bus,
        }
    }

    pub fn shared(welcome: &str, bus: EventBus) -> ChatHandle {
        Rc::new(RefCell::new(Self::new(welcome, bus)))
    }

    pub fn messages(&self) -> &[Message] {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text box binding for the UI
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether the Send control should be enabled
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Whether the Finish control should be enabled
    pub fn can_finalize(&self) -> bool {
        !self.saving
    }

    pub(crate) fn push(&mut self, sender: Sender, text: impl Into<String>) -> u64 {
        let id = self.store.append(sender, text);
        self.bus.request_scroll();
        id
    }

    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
    }

    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        if self.thinking != thinking {
            self.thinking = thinking;
            self.bus.request_scroll();
        }
    }

    pub(crate) fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }
}
