//! Right panel UI: station list, path distances and display settings.

use super::colors;
use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_right_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("right_panel")
        .resizable(true)
        .default_width(240.0)
        .min_width(180.0)
        .max_width(350.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Stations");
                ui.separator();

                render_stations_section(ui, state);
                ui.add_space(5.0);

                render_paths_section(ui, state);
                ui.add_space(5.0);

                render_settings_section(ui, state);
            });
        });
}

fn render_stations_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Placed").strong())
        .default_open(true)
        .show(ui, |ui| {
            if state.stations.is_empty() {
                ui.label(
                    RichText::new("Click the map to place a station")
                        .small()
                        .color(colors::ui::LABEL),
                );
                return;
            }

            for station in state.stations.stations() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{:>2}", station.number))
                            .monospace()
                            .color(colors::canvas::STATION),
                    );
                    ui.label(
                        RichText::new(station.position.to_string())
                            .monospace()
                            .color(colors::ui::VALUE),
                    );
                });
            }

            ui.add_space(4.0);
            if ui.button("Clear").clicked() {
                state.stations.clear();
                state.status_message = "Cleared all stations".to_string();
            }
        });
}

fn render_paths_section(ui: &mut egui::Ui, state: &AppState) {
    egui::CollapsingHeader::new(RichText::new("Paths").strong())
        .default_open(true)
        .show(ui, |ui| {
            let paths = state.stations.paths();
            if paths.is_empty() {
                ui.label(
                    RichText::new("Place two stations to draw a path")
                        .small()
                        .color(colors::ui::LABEL),
                );
                return;
            }

            egui::Grid::new("paths_grid")
                .num_columns(2)
                .spacing([12.0, 2.0])
                .show(ui, |ui| {
                    for path in paths {
                        let label = format!("{} \u{2192} {}", path.from, path.to);
                        ui.label(RichText::new(label).monospace());
                        ui.label(
                            RichText::new(format_distance(path.distance_km))
                                .monospace()
                                .color(colors::ui::VALUE),
                        );
                        ui.end_row();
                    }

                    ui.label(RichText::new("Total").strong());
                    ui.label(
                        RichText::new(format_distance(state.stations.total_distance_km()))
                            .monospace()
                            .strong(),
                    );
                    ui.end_row();
                });
        });
}

fn render_settings_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Settings").strong())
        .default_open(false)
        .show(ui, |ui| {
            let settings = &mut state.settings;
            let mut changed = false;

            changed |= ui
                .checkbox(&mut settings.follow_local_clock, "Follow local clock")
                .changed();

            if !settings.follow_local_clock {
                ui.indent("fixed_hour_indent", |ui| {
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.fixed_hour, 0.0..=23.75)
                                .text("Base hour"),
                        )
                        .changed();
                });
            }

            changed |= ui
                .add(egui::Slider::new(&mut settings.hour_step, 0.25..=6.0).text("Hour step"))
                .changed();

            ui.separator();

            changed |= ui
                .add(egui::Slider::new(&mut settings.path_width, 0.5..=10.0).text("Path width"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.station_radius, 1.0..=20.0)
                        .text("Station size"),
                )
                .changed();
            changed |= ui
                .checkbox(&mut settings.show_distance_labels, "Distance labels")
                .changed();

            if changed {
                state.settings_dirty = true;
            }
        });
}

/// Formats a distance for display.
pub fn format_distance(km: f64) -> String {
    let km = km.round() as u64;
    if km >= 1000 {
        format!("{},{:03} km", km / 1000, km % 1000)
    } else {
        format!("{} km", km)
    }
}
