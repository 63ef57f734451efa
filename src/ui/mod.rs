//! UI modules for the Station Map application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, simulated clock and status
//! - Central canvas: World map with paths and stations
//! - Bottom panel: Time-of-day controls
//! - Right panel: Station list, path distances and settings

mod bottom_panel;
mod canvas;
mod colors;
mod right_panel;
mod top_bar;

pub use bottom_panel::render_bottom_panel;
pub use canvas::render_canvas;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;
