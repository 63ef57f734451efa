//! Simulated time of day and the map dimming derived from it.

use chrono::{Local, Timelike};
use std::f32::consts::PI;

const HOURS_PER_DAY: f32 = 24.0;

/// Map brightness for an hour of the day: 1.0 at noon, 0.0 at midnight.
pub fn day_night_factor(hour: f32) -> f32 {
    let factor = ((hour - 12.0) / 12.0 * PI).cos();
    (factor + 1.0) / 2.0
}

/// Current local time as fractional hours.
pub fn local_clock_hour() -> f32 {
    let now = Local::now();
    now.hour() as f32 + now.minute() as f32 / 60.0
}

/// Formats fractional hours as `HH:MM`.
pub fn format_hour(hour: f32) -> String {
    let total_minutes = (hour * 60.0).round() as u32 % (24 * 60);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// User-controlled offset applied on top of the base hour.
#[derive(Default)]
pub struct DaylightState {
    /// Hours added to the base hour; may be negative
    pub hour_offset: f32,
}

impl DaylightState {
    /// Moves the simulated time by `hours` (negative rewinds).
    pub fn advance(&mut self, hours: f32) {
        self.hour_offset = (self.hour_offset + hours) % HOURS_PER_DAY;
    }

    pub fn reset(&mut self) {
        self.hour_offset = 0.0;
    }

    /// The simulated hour in [0, 24).
    pub fn effective_hour(&self, base_hour: f32) -> f32 {
        let hour = (base_hour + self.hour_offset).rem_euclid(HOURS_PER_DAY);
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs.
        if hour >= HOURS_PER_DAY {
            0.0
        } else {
            hour
        }
    }

    /// Map brightness for the simulated hour.
    pub fn factor(&self, base_hour: f32) -> f32 {
        day_night_factor(self.effective_hour(base_hour))
    }
}
