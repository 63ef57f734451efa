//! Great-circle arcs between two geographic points, sampled for drawing.

use super::{
    cartesian_to_geographic, geo_to_cartesian, geo_to_normalized_map,
    spherical_linear_interpolation, GeoCoordinate, NormalizedMapCoordinate,
};

/// Number of segments in an arc; an arc holds one more point than this.
pub const ARC_SEGMENTS: usize = 100;

/// Polyline approximation of a great-circle path in map space.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    points: Vec<NormalizedMapCoordinate>,
}

impl Arc {
    pub fn points(&self) -> &[NormalizedMapCoordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Splits the arc where it wraps around the antimeridian.
    ///
    /// Consecutive points more than one map half-width apart are on opposite
    /// edges of the map and must not be connected.
    pub fn segments(&self) -> Vec<&[NormalizedMapCoordinate]> {
        let mut segments = Vec::new();
        let mut start = 0;

        for i in 1..self.points.len() {
            if (self.points[i].x - self.points[i - 1].x).abs() > 1.0 {
                segments.push(&self.points[start..i]);
                start = i;
            }
        }
        if start < self.points.len() {
            segments.push(&self.points[start..]);
        }

        segments
    }
}

/// Builds the arc from `start` to `end` along the shorter great circle.
pub fn build_arc(start: GeoCoordinate, end: GeoCoordinate) -> Arc {
    let start = geo_to_cartesian(start);
    let end = geo_to_cartesian(end);

    let points = (0..=ARC_SEGMENTS)
        .map(|i| {
            let t = i as f64 / ARC_SEGMENTS as f64;
            let point = spherical_linear_interpolation(start, end, t);
            geo_to_normalized_map(cartesian_to_geographic(point))
        })
        .collect();

    Arc { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    fn assert_norm_close(a: NormalizedMapCoordinate, b: NormalizedMapCoordinate) {
        assert!((a.x - b.x).abs() < 1e-6, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn test_arc_has_101_points() {
        let arc = build_arc(geo(47.4979, 19.0402), geo(51.5074, -0.1278));
        assert_eq!(arc.len(), 101);
        assert!(!arc.is_empty());
    }

    #[test]
    fn test_arc_endpoints_match_projection() {
        let start = geo(47.4979, 19.0402);
        let end = geo(-33.8688, 151.2093);
        let arc = build_arc(start, end);

        assert_norm_close(arc.points()[0], geo_to_normalized_map(start));
        assert_norm_close(arc.points()[ARC_SEGMENTS], geo_to_normalized_map(end));
    }

    #[test]
    fn test_arc_is_deterministic() {
        let a = build_arc(geo(10.0, 20.0), geo(-30.0, 140.0));
        let b = build_arc(geo(10.0, 20.0), geo(-30.0, 140.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_arc_along_equator_is_straight() {
        let arc = build_arc(geo(0.0, -40.0), geo(0.0, 40.0));
        for point in arc.points() {
            assert!(point.y.abs() < 1e-9);
        }
    }

    #[test]
    fn test_great_circle_bows_poleward() {
        // Budapest to Seattle crosses far north of both endpoints.
        let start = geo(47.4979, 19.0402);
        let end = geo(47.6062, -122.3321);
        let arc = build_arc(start, end);

        let end_y = geo_to_normalized_map(end).y;
        let highest = arc.points().iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!(highest > end_y + 0.1);
    }

    #[test]
    fn test_same_endpoints_collapse_to_one_point() {
        let p = geo(35.0, 139.0);
        let arc = build_arc(p, p);
        let expected = geo_to_normalized_map(p);
        for point in arc.points() {
            assert_norm_close(*point, expected);
        }
    }

    #[test]
    fn test_segments_split_at_antimeridian() {
        let arc = build_arc(geo(20.0, 170.0), geo(20.0, -170.0));
        let segments = arc.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments.iter().map(|s| s.len()).sum::<usize>(), 101);

        let arc = build_arc(geo(20.0, 10.0), geo(25.0, 30.0));
        assert_eq!(arc.segments().len(), 1);
    }

    #[test]
    fn test_antipodal_arc_leaves_from_start() {
        let start = geo(30.0, 20.0);
        let arc = build_arc(start, geo(-30.0, -160.0));

        let first_step = arc.points()[1];
        assert!((first_step.x - 20.0 / 180.0).abs() < 1e-6);
        assert!(first_step.y > geo_to_normalized_map(start).y);

        assert_norm_close(arc.points()[50], geo_to_normalized_map(geo(60.0, -160.0)));
        assert!(arc.points().iter().any(|p| (p.y - 1.0).abs() < 1e-9));
    }
}
