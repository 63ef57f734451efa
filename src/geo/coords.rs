//! Coordinate value types shared by the projection and sphere math.

use geo_types::Coord;
use glam::DVec3;

use super::GeoError;

/// A geographic position in degrees.
///
/// Latitude is in [-90, 90] and longitude in [-180, 180]. Values built with
/// [`GeoCoordinate::new`] are validated; [`GeoCoordinate::from_degrees`] is
/// for values produced by the conversions in this module, which stay in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub(crate) const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.2}\u{00B0}{} {:.2}\u{00B0}{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// `geo_types` stores longitude in `x` and latitude in `y`.
impl From<GeoCoordinate> for Coord<f64> {
    fn from(geo: GeoCoordinate) -> Self {
        Coord {
            x: geo.longitude,
            y: geo.latitude,
        }
    }
}

impl TryFrom<Coord<f64>> for GeoCoordinate {
    type Error = GeoError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        GeoCoordinate::new(coord.y, coord.x)
    }
}

/// A position on the flattened map, both axes in [-1, 1].
///
/// (-1, -1) is the bottom-left corner of the map and (1, 1) the top-right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedMapCoordinate {
    pub x: f64,
    pub y: f64,
}

impl NormalizedMapCoordinate {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point on the unit sphere.
///
/// The z axis points to the north pole and the x axis crosses the equator
/// at the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianUnitVector(DVec3);

impl CartesianUnitVector {
    pub(crate) const fn from_unit(v: DVec3) -> Self {
        Self(v)
    }

    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(other.0)
    }
}
