//! Blocking notification window

use egui::{self, Align2, RichText};

use crate::state::UiState;
use crate::theme::*;

/// Show the pending notification, if any, until the user dismisses it
pub fn notice_window(ctx: &egui::Context, state: &mut UiState) {
    let Some(message) = state.notification.clone() else {
        return;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&message).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                state.dismiss_notification();
            }
        });
}
