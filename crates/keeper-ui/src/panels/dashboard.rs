//! Dashboard panel: headline stats, the story archive and the timeline.

use egui::{self, RichText, ScrollArea};

use keeper_core::dashboard::DashboardView;
use keeper_types::dashboard::{DashboardSnapshot, ResolvedStat, TimelineEvent};
use keeper_types::route::Route;
use keeper_types::story::StorySummary;

use crate::theme::*;

/// Render the dashboard. Returns a route when a link is clicked.
pub fn dashboard_panel(ui: &mut egui::Ui, view: &DashboardView) -> Option<Route> {
    let mut target = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Family Archive").color(TEXT_PRIMARY).strong());
                if ui.link("New story").clicked() {
                    target = Some(Route::Chat);
                }
            });
            ui.separator();

            match view.snapshot() {
                Some(snapshot) => {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            if let Some(route) = render_snapshot(ui, snapshot) {
                                target = Some(route);
                            }
                        });
                }
                None if view.is_loading() => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading archive...").color(TEXT_SECONDARY));
                    });
                }
                None => {
                    ui.label(RichText::new("Nothing to show yet.").color(TEXT_SECONDARY));
                }
            }
        });

    target
}

fn render_snapshot(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) -> Option<Route> {
    ui.horizontal_wrapped(|ui| {
        for stat in &snapshot.stats {
            stat_card(ui, stat);
        }
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Stories").color(TEXT_PRIMARY).strong());
    let mut target = None;
    for story in &snapshot.stories {
        if story_row(ui, story) {
            target = Some(Route::Story {
                id: story.id.clone(),
            });
        }
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Timeline").color(TEXT_PRIMARY).strong());
    for event in &snapshot.timeline {
        timeline_row(ui, event);
    }

    target
}

fn stat_card(ui: &mut egui::Ui, stat: &ResolvedStat) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(stat.icon.glyph())
                        .color(token_color(&stat.color))
                        .size(22.0),
                );
                ui.label(RichText::new(stat.value.to_string()).color(TEXT_PRIMARY).size(20.0).strong());
                ui.label(RichText::new(&stat.label).color(TEXT_SECONDARY).small());
                if !stat.trend.is_empty() {
                    ui.label(RichText::new(&stat.trend).color(SAGE).small());
                }
            });
        });
}

/// Returns true when the story title was clicked
fn story_row(ui: &mut egui::Ui, story: &StorySummary) -> bool {
    let mut clicked = false;
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                clicked = ui.link(RichText::new(&story.title).color(ACCENT)).clicked();
                ui.label(
                    RichText::new(format!("{} · {}", story.date, story.duration))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
            });
            if !story.topics.is_empty() {
                ui.label(RichText::new(story.topics.join(", ")).color(TEXT_SECONDARY).small());
            }
        });
    ui.add_space(4.0);
    clicked
}

fn timeline_row(ui: &mut egui::Ui, event: &TimelineEvent) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&event.year).color(ACCENT).strong());
        ui.vertical(|ui| {
            ui.label(RichText::new(&event.title).color(TEXT_PRIMARY));
            ui.label(RichText::new(&event.desc).color(TEXT_SECONDARY).small());
        });
    });
}
