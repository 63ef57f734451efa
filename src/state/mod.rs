//! Application state management.
//!
//! All mutable state lives in [`AppState`], owned by the app and touched
//! only from the UI update loop.

mod daylight;
mod launch_args;
mod settings;
mod stations;

pub use daylight::{day_night_factor, format_hour, local_clock_hour, DaylightState};
pub use launch_args::{parse_from_env, LaunchParams};
pub use settings::AppSettings;
pub use stations::{StationLog, StationPath};

use crate::geo::GeoCoordinate;

/// Root application state containing all sub-states.
#[derive(Default)]
pub struct AppState {
    /// Placed stations and the paths between them
    pub stations: StationLog,

    /// Simulated time of day
    pub daylight: DaylightState,

    /// Persisted user settings
    pub settings: AppSettings,

    /// Set when settings were edited and should be written out
    pub settings_dirty: bool,

    /// Application status message displayed in top bar
    pub status_message: String,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings,
            status_message: "Click the map to place a station".to_string(),
            ..Default::default()
        }
    }

    /// Applies stations and hour offset given on the command line.
    pub fn apply_launch_params(&mut self, params: LaunchParams) {
        if let Some(hours) = params.hour_offset {
            self.daylight.advance(hours);
        }
        for position in params.stations {
            self.place_station(position);
        }
    }

    /// Places a station and updates the status line.
    pub fn place_station(&mut self, position: GeoCoordinate) {
        let number = self.stations.add_station(position);
        self.status_message = match self.stations.paths().last() {
            Some(path) if path.to == number => format!(
                "Station {} at {} ({:.0} km from station {})",
                number, position, path.distance_km, path.from
            ),
            _ => format!("Station {} at {}", number, position),
        };
    }

    /// Moves the simulated clock by `steps` hour steps.
    pub fn step_hours(&mut self, steps: f32) {
        self.daylight.advance(steps * self.settings.hour_step);
    }

    /// Simulated hour for the given local clock hour.
    pub fn current_hour(&self, clock_hour: f32) -> f32 {
        self.daylight.effective_hour(self.settings.base_hour(clock_hour))
    }

    /// Map brightness for the given local clock hour.
    pub fn current_factor(&self, clock_hour: f32) -> f32 {
        self.daylight.factor(self.settings.base_hour(clock_hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_station_status() {
        let mut state = AppState::new(AppSettings::default());
        state.place_station(GeoCoordinate::new(0.0, 0.0).unwrap());
        assert!(state.status_message.starts_with("Station 1 at"));

        state.place_station(GeoCoordinate::new(0.0, 90.0).unwrap());
        assert!(state.status_message.contains("10000 km from station 1"));
    }

    #[test]
    fn test_apply_launch_params() {
        let mut settings = AppSettings::default();
        settings.follow_local_clock = false;
        settings.fixed_hour = 12.0;

        let mut state = AppState::new(settings);
        state.apply_launch_params(LaunchParams {
            stations: vec![
                GeoCoordinate::new(47.4979, 19.0402).unwrap(),
                GeoCoordinate::new(51.5074, -0.1278).unwrap(),
            ],
            hour_offset: Some(-12.0),
        });

        assert_eq!(state.stations.stations().len(), 2);
        assert_eq!(state.stations.paths().len(), 1);
        assert!(state.current_factor(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_step_hours_uses_configured_step() {
        let mut settings = AppSettings::default();
        settings.hour_step = 0.5;
        settings.follow_local_clock = false;
        settings.fixed_hour = 12.0;

        let mut state = AppState::new(settings);
        state.step_hours(3.0);
        assert!((state.current_hour(0.0) - 13.5).abs() < 1e-5);

        state.step_hours(-6.0);
        assert!((state.current_hour(0.0) - 10.5).abs() < 1e-5);
    }

    #[test]
    fn test_current_factor_at_fixed_noon() {
        let mut settings = AppSettings::default();
        settings.follow_local_clock = false;
        settings.fixed_hour = 12.0;

        let state = AppState::new(settings);
        assert!((state.current_factor(3.0) - 1.0).abs() < 1e-6);
    }
}
