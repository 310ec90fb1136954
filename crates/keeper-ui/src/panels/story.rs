//! Story detail panel

use egui::{self, RichText, ScrollArea};

use keeper_core::story::{StoryStatus, StoryView};
use keeper_types::route::Route;

use crate::theme::*;

pub fn story_panel(ui: &mut egui::Ui, view: &StoryView) -> Option<Route> {
    let mut target = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            if ui.link("← Back to archive").clicked() {
                target = Some(Route::Dashboard);
            }
            ui.separator();

            match (view.status(), view.story()) {
                (StoryStatus::Found, Some(story)) => {
                    ui.heading(RichText::new(story.title()).color(TEXT_PRIMARY).strong());
                    ui.label(
                        RichText::new(format!("{} · {}", story.summary.date, story.summary.duration))
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                    if !story.summary.topics.is_empty() {
                        ui.label(
                            RichText::new(story.summary.topics.join(", "))
                                .color(SAGE)
                                .small(),
                        );
                    }
                    if let Some(url) = &story.summary.audio_url {
                        ui.hyperlink_to("Listen to the recording", url);
                    }
                    ui.add_space(8.0);
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.label(RichText::new(&story.content).color(TEXT_PRIMARY));
                        });
                }
                (StoryStatus::Loading, _) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading story...").color(TEXT_SECONDARY));
                    });
                }
                _ => {
                    ui.label(RichText::new("Story not found.").color(TEXT_SECONDARY));
                }
            }
        });

    target
}
