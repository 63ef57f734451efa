//! Great-circle distance between two geographic points.

use std::f64::consts::PI;

use super::{geo_to_cartesian, GeoCoordinate, PARALLEL_DOT_THRESHOLD};

/// Earth radius derived from a 40 000 km circumference.
pub const EARTH_RADIUS_KM: f64 = 40_000.0 / (2.0 * PI);

/// Great-circle distance in kilometres.
///
/// The dot product is clamped to [-0.9995, 0.9995] before `acos`, which caps
/// distances just short of half the circumference. Nearly identical points
/// take the angle from the chord length instead, so a point is at distance
/// zero from itself.
pub fn distance_km(start: GeoCoordinate, end: GeoCoordinate) -> f64 {
    let a = geo_to_cartesian(start);
    let b = geo_to_cartesian(end);
    let dot = a.dot(&b);

    let angle = if dot > PARALLEL_DOT_THRESHOLD {
        let chord = (b.as_dvec3() - a.as_dvec3()).length();
        2.0 * (chord / 2.0).asin()
    } else {
        dot.clamp(-PARALLEL_DOT_THRESHOLD, PARALLEL_DOT_THRESHOLD).acos()
    };

    angle * EARTH_RADIUS_KM
}
