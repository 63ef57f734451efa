//! Map projection and coordinate transformation.
//!
//! Handles converting between geographic coordinates (lat/lon), the
//! normalized map square, and screen coordinates for rendering on the canvas.
//!
//! Latitude goes through a Mercator-style log-tangent transform restricted
//! to [-85, 85] degrees; longitude maps linearly.

use eframe::egui::{Pos2, Rect, Vec2};

use super::{GeoCoordinate, GeoError, NormalizedMapCoordinate};

/// Highest latitude (in degrees) representable on the map.
pub const MAX_PROJECTED_LATITUDE: f64 = 85.0;

/// Mercator ordinate for a latitude in radians.
fn mercator_y(latitude_rad: f64) -> f64 {
    (latitude_rad.tan() + 1.0 / latitude_rad.cos()).ln()
}

/// Mercator ordinates of the bottom and top edges of the map.
fn mercator_bounds() -> (f64, f64) {
    let max = MAX_PROJECTED_LATITUDE.to_radians();
    (mercator_y(-max), mercator_y(max))
}

/// Converts geographic coordinates to normalized map coordinates.
///
/// Latitudes outside the supported band are clamped to +/-85 degrees.
pub fn geo_to_normalized_map(geo: GeoCoordinate) -> NormalizedMapCoordinate {
    let latitude = geo
        .latitude()
        .clamp(-MAX_PROJECTED_LATITUDE, MAX_PROJECTED_LATITUDE);
    let (y_min, y_max) = mercator_bounds();
    let y = mercator_y(latitude.to_radians());

    NormalizedMapCoordinate {
        x: geo.longitude() / 180.0,
        y: -1.0 + 2.0 * (y - y_min) / (y_max - y_min),
    }
}

/// Like [`geo_to_normalized_map`], but fails instead of clamping.
pub fn try_geo_to_normalized_map(geo: GeoCoordinate) -> Result<NormalizedMapCoordinate, GeoError> {
    if geo.latitude().abs() > MAX_PROJECTED_LATITUDE {
        return Err(GeoError::LatitudeOutsideProjection(geo.latitude()));
    }
    Ok(geo_to_normalized_map(geo))
}

/// Converts normalized map coordinates back to geographic coordinates.
///
/// Inverse of [`geo_to_normalized_map`] for latitudes inside the band.
pub fn map_coordinates_to_geographic(norm: NormalizedMapCoordinate) -> GeoCoordinate {
    let (y_min, y_max) = mercator_bounds();
    let y = y_min + (norm.y + 1.0) / 2.0 * (y_max - y_min);
    let latitude = y.sinh().atan().to_degrees();

    GeoCoordinate::from_degrees(latitude, norm.x * 180.0)
}

/// Screen placement of the map square inside the canvas.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Screen rectangle covered by the map (always square)
    pub map_rect: Rect,
}

impl MapProjection {
    /// Fits the largest square map into `canvas`, centred.
    pub fn fit(canvas: Rect) -> Self {
        let side = canvas.width().min(canvas.height());
        Self {
            map_rect: Rect::from_center_size(canvas.center(), Vec2::splat(side)),
        }
    }

    /// Converts normalized map coordinates to a screen position.
    pub fn normalized_to_screen(&self, norm: NormalizedMapCoordinate) -> Pos2 {
        let rect = self.map_rect;
        Pos2::new(
            rect.left() + ((norm.x as f32) + 1.0) / 2.0 * rect.width(),
            rect.top() + (1.0 - norm.y as f32) / 2.0 * rect.height(),
        )
    }

    /// Converts a screen position to normalized map coordinates.
    ///
    /// Screen y grows downward, map y grows upward.
    pub fn screen_to_normalized(&self, pos: Pos2) -> NormalizedMapCoordinate {
        let rect = self.map_rect;
        NormalizedMapCoordinate {
            x: (2.0 * (pos.x - rect.left()) / rect.width() - 1.0) as f64,
            y: (1.0 - 2.0 * (pos.y - rect.top()) / rect.height()) as f64,
        }
    }

    /// Converts geographic coordinates to a screen position.
    pub fn geo_to_screen(&self, geo: GeoCoordinate) -> Pos2 {
        self.normalized_to_screen(geo_to_normalized_map(geo))
    }

    /// Converts a screen position to geographic coordinates, or `None` when
    /// the position lies outside the map.
    pub fn screen_to_geo(&self, pos: Pos2) -> Option<GeoCoordinate> {
        if !self.contains(pos) {
            return None;
        }
        Some(map_coordinates_to_geographic(self.screen_to_normalized(pos)))
    }

    /// Checks if a screen position lies on the map.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.map_rect.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_origin_maps_to_center() {
        let norm = geo_to_normalized_map(geo(0.0, 0.0));
        assert!(norm.x.abs() < 1e-9);
        assert!(norm.y.abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_maps_to_edges() {
        assert!((geo_to_normalized_map(geo(0.0, 180.0)).x - 1.0).abs() < 1e-9);
        assert!((geo_to_normalized_map(geo(0.0, -180.0)).x + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_edges_map_to_map_edges() {
        assert!((geo_to_normalized_map(geo(85.0, 0.0)).y - 1.0).abs() < 1e-9);
        assert!((geo_to_normalized_map(geo(-85.0, 0.0)).y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_latitude_clamped_outside_band() {
        let pole = geo_to_normalized_map(geo(90.0, 10.0));
        assert!(pole.y.is_finite());
        assert!((pole.y - 1.0).abs() < 1e-9);

        let south = geo_to_normalized_map(geo(-89.9, 10.0));
        assert!((south.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_try_projection_rejects_polar_latitude() {
        assert_eq!(
            try_geo_to_normalized_map(geo(86.0, 0.0)),
            Err(GeoError::LatitudeOutsideProjection(86.0))
        );
        assert!(try_geo_to_normalized_map(geo(85.0, 0.0)).is_ok());
    }

    #[test]
    fn test_round_trip_inside_band() {
        let mut lat = -84.5;
        while lat < 85.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let original = geo(lat, lon);
                let back = map_coordinates_to_geographic(geo_to_normalized_map(original));
                assert!((back.latitude() - lat).abs() < 1e-3, "lat {lat} lon {lon}");
                assert!((back.longitude() - lon).abs() < 1e-3, "lat {lat} lon {lon}");
                lon += 22.5;
            }
            lat += 6.5;
        }
    }

    #[test]
    fn test_mercator_stretches_high_latitudes() {
        let y = |lat| geo_to_normalized_map(geo(lat, 0.0)).y;
        let low = y(10.0) - y(0.0);
        let high = y(80.0) - y(70.0);
        assert!(high > low * 2.0);
    }

    #[test]
    fn test_screen_conversion() {
        let projection = MapProjection {
            map_rect: Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(600.0)),
        };

        let center = projection.normalized_to_screen(NormalizedMapCoordinate::CENTER);
        assert!((center.x - 400.0).abs() < 1e-4);
        assert!((center.y - 350.0).abs() < 1e-4);

        let top_left = projection.screen_to_normalized(Pos2::new(100.0, 50.0));
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let norm = NormalizedMapCoordinate::new(0.25, -0.5);
        let back = projection.screen_to_normalized(projection.normalized_to_screen(norm));
        assert!((back.x - norm.x).abs() < 1e-5);
        assert!((back.y - norm.y).abs() < 1e-5);
    }

    #[test]
    fn test_fit_is_square_and_centered() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));
        let projection = MapProjection::fit(canvas);
        assert_eq!(projection.map_rect.width(), 600.0);
        assert_eq!(projection.map_rect.height(), 600.0);
        assert_eq!(projection.map_rect.center(), canvas.center());
    }

    #[test]
    fn test_clicks_outside_map_are_ignored() {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0));
        let projection = MapProjection::fit(canvas);
        assert!(projection.screen_to_geo(Pos2::new(50.0, 300.0)).is_none());

        let equator = projection.screen_to_geo(Pos2::new(400.0, 300.0)).unwrap();
        assert!(equator.latitude().abs() < 1e-3);
        assert!(equator.longitude().abs() < 1e-3);
    }
}
