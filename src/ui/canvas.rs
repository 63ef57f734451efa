//! Central canvas UI: the world map, paths and stations.

use super::colors;
use super::right_panel::format_distance;
use crate::geo::{MapProjection, NormalizedMapCoordinate};
use crate::map::MapTextureCache;
use crate::state::{AppSettings, AppState, StationLog, StationPath};
use eframe::egui::{self, pos2, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

/// Render the map canvas and place stations on click.
pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    texture_cache: &mut MapTextureCache,
    daylight_factor: f32,
) {
    let texture_id = texture_cache.texture_id(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::canvas::BACKGROUND);

        let projection = MapProjection::fit(rect);

        painter.image(
            texture_id,
            projection.map_rect,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            colors::canvas::daylight_tint(daylight_factor),
        );

        // Paths first so station markers stay on top
        let painter = painter.with_clip_rect(projection.map_rect);
        render_paths(&painter, &projection, &state.stations, &state.settings);
        render_stations(&painter, &projection, &state.stations, &state.settings);

        handle_canvas_click(&response, &projection, state);
    });
}

fn handle_canvas_click(
    response: &egui::Response,
    projection: &MapProjection,
    state: &mut AppState,
) {
    if !response.clicked() {
        return;
    }

    let Some(pos) = response.interact_pointer_pos() else {
        return;
    };

    match projection.screen_to_geo(pos) {
        Some(position) => state.place_station(position),
        None => log::debug!("Ignoring click outside the map at {:?}", pos),
    }
}

/// Render every path as a polyline, split at the antimeridian.
fn render_paths(
    painter: &Painter,
    projection: &MapProjection,
    stations: &StationLog,
    settings: &AppSettings,
) {
    let stroke = Stroke::new(settings.path_width, colors::canvas::PATH);

    for path in stations.paths() {
        for segment in path.arc.segments() {
            if segment.len() < 2 {
                continue;
            }
            let points = to_screen(projection, segment);
            painter.add(Shape::line(points, stroke));
        }

        if settings.show_distance_labels {
            render_distance_label(painter, projection, path);
        }
    }
}

fn to_screen(projection: &MapProjection, points: &[NormalizedMapCoordinate]) -> Vec<Pos2> {
    points
        .iter()
        .map(|p| projection.normalized_to_screen(*p))
        .collect()
}

/// Label a path with its distance at the arc's middle point.
fn render_distance_label(painter: &Painter, projection: &MapProjection, path: &StationPath) {
    let points = path.arc.points();
    let Some(middle) = points.get(points.len() / 2) else {
        return;
    };

    let anchor = projection.normalized_to_screen(*middle) + Vec2::new(6.0, -6.0);
    let galley = painter.layout_no_wrap(
        format_distance(path.distance_km),
        egui::FontId::proportional(11.0),
        colors::canvas::DISTANCE_LABEL,
    );
    let size = galley.size();
    let text_rect = Rect::from_min_size(anchor - Vec2::new(0.0, size.y), size);

    painter.rect_filled(text_rect.expand(2.0), 2.0, colors::canvas::label_backdrop());
    painter.galley(text_rect.min, galley, colors::canvas::DISTANCE_LABEL);
}

/// Render station markers with their placement numbers.
fn render_stations(
    painter: &Painter,
    projection: &MapProjection,
    stations: &StationLog,
    settings: &AppSettings,
) {
    let radius = settings.station_radius;

    for station in stations.stations() {
        let pos = projection.geo_to_screen(station.position);
        painter.circle_filled(pos, radius, colors::canvas::STATION);
        painter.text(
            pos + Vec2::new(radius + 2.0, -radius),
            egui::Align2::LEFT_BOTTOM,
            station.number.to_string(),
            egui::FontId::proportional(10.0),
            colors::canvas::STATION_LABEL,
        );
    }
}
