pub mod chat;
pub mod dashboard;
pub mod story;
pub mod notice;
