//! Chat panel: message timeline, thinking indicator and the composer.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use keeper_core::chat::ChatSession;
use keeper_types::message::Message;

use crate::theme::*;

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Send,
    Finalize,
}

/// Render the chat panel. The input buffer is edited in place; sending
/// and finishing are left to the caller.
pub fn chat_panel(ui: &mut egui::Ui, chat: &mut ChatSession, scroll: bool) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Memory Keeper").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let label = if chat.is_saving() {
                            "Saving..."
                        } else {
                            "Finish & Save Story"
                        };
                        let finish = ui.add_enabled(
                            chat.can_finalize(),
                            egui::Button::new(RichText::new(label).color(BG_SECONDARY))
                                .fill(SAGE)
                                .corner_radius(PANEL_ROUNDING),
                        );
                        if finish.clicked() {
                            action = Some(ChatAction::Finalize);
                        }
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in chat.messages() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                        if chat.is_thinking() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Listening...").color(TEXT_SECONDARY).italics());
                            });
                        }
                        if scroll {
                            ui.scroll_to_cursor(Some(Align::BOTTOM));
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(chat.input_mut())
                        .hint_text("Share a memory...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add(input);

                    let send_enabled = chat.can_send();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let entered = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled;
                    if entered || send_btn.clicked() {
                        action = Some(ChatAction::Send);
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label_color, bg, layout) = if message.is_ai() {
        (SAGE, BG_SECONDARY, Layout::left_to_right(Align::Min))
    } else {
        (ACCENT, BG_SURFACE, Layout::right_to_left(Align::Min))
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(message.sender.label())
                            .color(label_color)
                            .strong()
                            .small(),
                    );
                    ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(message.time_label())
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
    });
}
