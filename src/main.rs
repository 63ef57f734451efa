#![warn(clippy::all)]

//! Station Map - place stations on a world map and connect them with
//! great-circle paths.
//!
//! Left click places a station; each new station is joined to the previous
//! one by the shorter great-circle arc. The map dims with a simulated
//! day/night cycle that follows the local clock and can be shifted with the
//! arrow keys.

use eframe::egui;
use station_map::map::MapTextureCache;
use station_map::state::{self, AppSettings, AppState};
use station_map::ui;

/// Side length of the map square at the initial window size.
const MAP_SIZE: f32 = 600.0;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Station Map")
            // Map square plus the side and top/bottom panels
            .with_inner_size([MAP_SIZE + 260.0, MAP_SIZE + 90.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Station Map",
        native_options,
        Box::new(|cc| Ok(Box::new(StationMapApp::new(cc)))),
    )
}

/// Main application state and logic.
pub struct StationMapApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Uploaded world map texture
    map_texture: MapTextureCache,
}

impl StationMapApp {
    /// Creates a new StationMapApp instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();
        log::info!(
            "Starting with hour step {} h, {} base hour",
            settings.hour_step,
            if settings.follow_local_clock {
                "local clock"
            } else {
                "fixed"
            }
        );

        let mut app_state = AppState::new(settings);
        app_state.apply_launch_params(state::parse_from_env());

        Self {
            state: app_state,
            map_texture: MapTextureCache::new(),
        }
    }

    /// Keyboard shortcuts: arrows move the simulated hour, R resets it,
    /// Escape quits.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (forward, backward, reset, quit) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if forward {
            self.state.step_hours(1.0);
        }
        if backward {
            self.state.step_hours(-1.0);
        }
        if reset {
            self.state.daylight.reset();
            self.state.status_message = "Time reset".to_string();
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for StationMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        let clock_hour = state::local_clock_hour();
        let factor = self.state.current_factor(clock_hour);

        // Side and top/bottom panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &self.state, clock_hour);
        ui::render_bottom_panel(ctx, &mut self.state, clock_hour);
        ui::render_right_panel(ctx, &mut self.state);
        ui::render_canvas(ctx, &mut self.state, &mut self.map_texture, factor);

        // Wait for slider drags to finish before writing the file
        let pointer_down = ctx.input(|i| i.pointer.any_down());
        if self.state.settings_dirty && !pointer_down {
            self.state.settings_dirty = false;
            self.state.settings.save();
        }

        // The local clock keeps moving; refresh once a minute is enough.
        if self.state.settings.follow_local_clock {
            ctx.request_repaint_after(std::time::Duration::from_secs(60));
        }
    }
}
