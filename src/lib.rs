//! Great-circle station map.
//!
//! `geo` holds the projection and sphere math, `map` the bundled world map
//! image, `state` everything the UI mutates, and `ui` the egui panels.

pub mod geo;
pub mod map;
pub mod state;
pub mod ui;
