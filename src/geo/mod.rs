//! Geographic math for the station map.
//!
//! Conversions between geographic coordinates, the normalized map square
//! and unit-sphere vectors, plus the great-circle arcs and distances built
//! on them. Everything here is pure: no state, no I/O, no logging.

mod coords;
mod distance;
mod path;
mod projection;
mod sphere;

pub use coords::{CartesianUnitVector, GeoCoordinate, NormalizedMapCoordinate};
pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use path::{build_arc, Arc, ARC_SEGMENTS};
pub use projection::{
    geo_to_normalized_map, map_coordinates_to_geographic, try_geo_to_normalized_map, MapProjection,
    MAX_PROJECTED_LATITUDE,
};
pub use sphere::{
    cartesian_to_geographic, geo_to_cartesian, spherical_linear_interpolation,
    PARALLEL_DOT_THRESHOLD,
};

/// Errors raised when a coordinate cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude outside [-90, 90] or not finite.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] or not finite.
    InvalidLongitude(f64),
    /// Latitude beyond the +/-85 degree band the map projection supports.
    LatitudeOutsideProjection(f64),
}

impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            GeoError::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            GeoError::LatitudeOutsideProjection(lat) => write!(
                f,
                "Latitude {} outside supported range (+/-{})",
                lat, MAX_PROJECTED_LATITUDE
            ),
        }
    }
}

impl std::error::Error for GeoError {}
