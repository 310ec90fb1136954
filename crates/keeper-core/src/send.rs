//! Send pipeline: one user turn through the backend.
//!
//! 1. Append the user's message and clear the input (before any I/O)
//! 2. Raise the thinking indicator
//! 3. `POST /api/v1/chat/send`
//! 4. Append the backend's reply, or the canned fallback after a delay
//!
//! Every accepted send appends exactly one assistant message. Sends are not
//! serialised against each other; replies land in settlement order.

use std::rc::Rc;

use futures::future::{self, Either};
use keeper_types::{
    KeeperError,
    api::ChatTurnRequest,
    config::{ClientConfig, FallbackPolicy},
    message::Sender,
    session::SessionContext,
};

use crate::chat::ChatHandle;
use crate::ports::{BackendPort, TimerPort};

/// How a send ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, nothing happened
    Ignored,
    /// The backend's reply was appended
    Replied,
    /// The canned fallback reply was appended
    FellBack,
}

pub struct SendPipeline {
    backend: Rc<dyn BackendPort>,
    timer: Rc<dyn TimerPort>,
    session: SessionContext,
    policy: FallbackPolicy,
    fallback_delay_ms: u32,
    fallback_reply: String,
}

impl SendPipeline {
    pub fn new(
        config: &ClientConfig,
        backend: Rc<dyn BackendPort>,
        timer: Rc<dyn TimerPort>,
    ) -> Self {
        Self {
            backend,
            timer,
            session: config.session(),
            policy: config.fallback_policy,
            fallback_delay_ms: config.fallback_delay_ms,
            fallback_reply: config.fallback_reply.clone(),
        }
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Send whatever is in the session's input box.
    ///
    /// Must be spawned via `wasm_bindgen_futures::spawn_local`; it suspends on
    /// the network call and, on failure, on the fallback timer.
    pub async fn send(&self, chat: &ChatHandle) -> SendOutcome {
        let text = {
            let mut chat = chat.borrow_mut();
            if !chat.can_send() {
                return SendOutcome::Ignored;
            }
            let text = chat.input().to_string();
            chat.push(Sender::User, text.clone());
            chat.clear_input();
            chat.set_thinking(true);
            text
        };

        log::debug!("Sending turn ({} chars)", text.len());
        let req = ChatTurnRequest::new(text, self.session.id());

        match self.policy {
            FallbackPolicy::Decoupled => self.send_decoupled(chat, req).await,
            FallbackPolicy::Raced => self.send_raced(chat, req).await,
        }
    }

    /// The indicator drops as soon as the request settles; a fallback reply
    /// only shows up after the delay.
    async fn send_decoupled(&self, chat: &ChatHandle, req: ChatTurnRequest) -> SendOutcome {
        match self.backend.send_chat(req).await {
            Ok(reply) => {
                if let Some(sentiment) = &reply.sentiment {
                    log::debug!("Reply sentiment: {}", sentiment);
                }
                let mut chat = chat.borrow_mut();
                chat.push(Sender::Ai, reply.reply);
                chat.set_thinking(false);
                SendOutcome::Replied
            }
            Err(e) => {
                log::warn!(
                    "Chat send failed ({}), falling back in {}ms",
                    e,
                    self.fallback_delay_ms
                );
                chat.borrow_mut().set_thinking(false);
                self.timer.sleep(self.fallback_delay_ms).await;
                chat.borrow_mut().push(Sender::Ai, self.fallback_reply.clone());
                SendOutcome::FellBack
            }
        }
    }

    /// The request races the fallback delay; the indicator stays up until
    /// the reply, real or canned, is in the timeline.
    async fn send_raced(&self, chat: &ChatHandle, req: ChatTurnRequest) -> SendOutcome {
        let reply = self.backend.send_chat(req);
        let deadline = self.timer.sleep(self.fallback_delay_ms);

        let (text, outcome) = match future::select(reply, deadline).await {
            Either::Left((Ok(reply), _)) => (reply.reply, SendOutcome::Replied),
            Either::Left((Err(e), deadline)) => {
                log::warn!("Chat send failed ({}), waiting out fallback delay", e);
                deadline.await;
                (self.fallback_reply.clone(), SendOutcome::FellBack)
            }
            Either::Right(((), _late)) => {
                let e = KeeperError::Timeout(self.fallback_delay_ms);
                log::warn!("Chat send gave up ({}), using fallback", e);
                (self.fallback_reply.clone(), SendOutcome::FellBack)
            }
        };

        let mut chat = chat.borrow_mut();
        chat.push(Sender::Ai, text);
        chat.set_thinking(false);
        outcome
    }
}
