//! Timer adapter backed by `setTimeout` through gloo-timers.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use keeper_core::ports::TimerPort;

pub struct BrowserTimer;

#[async_trait(?Send)]
impl TimerPort for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
