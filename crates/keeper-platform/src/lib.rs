//! Browser adapters for the Memory Keeper client.

pub mod http;
pub mod timer;
pub mod location;

pub use http::HttpBackend;
pub use timer::BrowserTimer;
