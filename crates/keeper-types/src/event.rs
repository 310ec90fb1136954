use serde::{Deserialize, Serialize};

use crate::route::Route;

/// Events emitted by the pipelines.
/// The UI drains these each frame and applies them to its view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeeperEvent {
    /// The message timeline or the thinking indicator changed
    ScrollToBottom,

    /// Switch the visible view
    Navigate { route: Route },

    /// Blocking, user-visible notification
    Notify { message: String },
}
