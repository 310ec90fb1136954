//! egui views for the Memory Keeper client.
//!
//! Panels only read pipeline state and report what the user asked for;
//! the app crate turns those requests into pipeline calls.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
