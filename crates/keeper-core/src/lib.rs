//! Memory Keeper core: the client-side state machines.
//!
//! Everything here is platform-free; the browser adapters in
//! `keeper-platform` implement the traits in [`ports`].

pub mod ports;
pub mod event_bus;
pub mod message_store;
pub mod chat;
pub mod send;
pub mod finalize;
pub mod dashboard;
pub mod story;
