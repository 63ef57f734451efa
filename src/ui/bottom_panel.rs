//! Bottom panel UI: simulated time controls.

use super::colors;
use crate::state::{format_hour, AppState};
use eframe::egui::{self, RichText};

pub fn render_bottom_panel(ctx: &egui::Context, state: &mut AppState, clock_hour: f32) {
    egui::TopBottomPanel::bottom("bottom_panel")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                render_time_controls(ui, state, clock_hour);
            });
        });
}

fn render_time_controls(ui: &mut egui::Ui, state: &mut AppState, clock_hour: f32) {
    // Rewind
    if ui
        .button(RichText::new("\u{23EA}").size(14.0))
        .on_hover_text("Rewind (Left arrow)")
        .clicked()
    {
        state.step_hours(-1.0);
    }

    // Advance
    if ui
        .button(RichText::new("\u{23E9}").size(14.0))
        .on_hover_text("Advance (Right arrow)")
        .clicked()
    {
        state.step_hours(1.0);
    }

    if ui.button("Now").on_hover_text("Reset (R)").clicked() {
        state.daylight.reset();
    }

    ui.separator();

    let hour = state.current_hour(clock_hour);
    ui.label(RichText::new("Time:").size(11.0).color(colors::ui::LABEL));
    ui.label(
        RichText::new(format_hour(hour))
            .monospace()
            .size(13.0)
            .color(colors::ui::ACTIVE),
    );

    ui.label(RichText::new("Offset:").size(11.0).color(colors::ui::LABEL));
    ui.label(
        RichText::new(format!("{:+.1} h", state.daylight.hour_offset))
            .monospace()
            .color(colors::ui::VALUE),
    );

    ui.separator();

    ui.label(RichText::new("Daylight:").size(11.0).color(colors::ui::LABEL));
    ui.label(
        RichText::new(format!("{:.0}%", state.current_factor(clock_hour) * 100.0))
            .monospace()
            .color(colors::ui::VALUE),
    );
}
