//! Unit-sphere conversions and spherical linear interpolation.

use glam::DVec3;

use super::{CartesianUnitVector, GeoCoordinate};

/// Above this dot product two vectors are treated as parallel.
pub const PARALLEL_DOT_THRESHOLD: f64 = 0.9995;

/// Below this `sin(angle)` two vectors are treated as antipodal.
const ANTIPODAL_SIN_EPSILON: f64 = 1e-6;

/// Converts geographic coordinates to a point on the unit sphere.
pub fn geo_to_cartesian(geo: GeoCoordinate) -> CartesianUnitVector {
    let lat = geo.latitude().to_radians();
    let lon = geo.longitude().to_radians();

    CartesianUnitVector::from_unit(DVec3::new(
        lat.cos() * lon.cos(),
        lat.cos() * lon.sin(),
        lat.sin(),
    ))
}

/// Converts a point on the unit sphere to geographic coordinates.
pub fn cartesian_to_geographic(v: CartesianUnitVector) -> GeoCoordinate {
    let v = v.as_dvec3();
    // Rounding can push z slightly past +/-1.
    let latitude = v.z.clamp(-1.0, 1.0).asin().to_degrees();
    let longitude = v.y.atan2(v.x).to_degrees();

    GeoCoordinate::from_degrees(latitude, longitude)
}

/// Spherical linear interpolation between `a` (t = 0) and `b` (t = 1).
///
/// Nearly parallel vectors fall back to normalized linear interpolation,
/// where dividing by `sin(angle)` would be unstable. Antipodal vectors have
/// no unique great circle; they are joined through the north pole (or along
/// an arbitrary meridian plane when `a` is itself a pole).
pub fn spherical_linear_interpolation(
    a: CartesianUnitVector,
    b: CartesianUnitVector,
    t: f64,
) -> CartesianUnitVector {
    let dot = a.dot(&b);
    let (a, b) = (a.as_dvec3(), b.as_dvec3());

    if dot > PARALLEL_DOT_THRESHOLD {
        let mixed = a.lerp(b, t);
        return CartesianUnitVector::from_unit(mixed.try_normalize().unwrap_or(a));
    }

    let angle = dot.clamp(-1.0, 1.0).acos();
    let sin_angle = angle.sin();

    if sin_angle < ANTIPODAL_SIN_EPSILON {
        let toward = (DVec3::Z - a * a.z)
            .try_normalize()
            .unwrap_or_else(|| a.any_orthonormal_vector());
        let theta = t * angle;
        return CartesianUnitVector::from_unit(a * theta.cos() + toward * theta.sin());
    }

    CartesianUnitVector::from_unit(
        a * (((1.0 - t) * angle).sin() / sin_angle) + b * ((t * angle).sin() / sin_angle),
    )
}
