pub mod message;
pub mod story;
pub mod dashboard;
pub mod api;
pub mod event;
pub mod route;
pub mod config;
pub mod error;
pub mod session;


pub use error::KeeperError;
pub type Result<T> = std::result::Result<T, KeeperError>;
