//! Placed stations and the paths connecting them.

use crate::geo::{build_arc, distance_km, Arc, GeoCoordinate};

/// A station placed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// 1-based placement order
    pub number: usize,
    pub position: GeoCoordinate,
}

/// A great-circle path between two consecutively placed stations.
#[derive(Debug, Clone)]
pub struct StationPath {
    /// Number of the station the path starts at
    pub from: usize,
    /// Number of the station the path ends at
    pub to: usize,
    pub arc: Arc,
    pub distance_km: f64,
}

/// Append-only log of stations in click order.
///
/// Every station after the first is joined to its predecessor, so there is
/// always exactly one path fewer than there are stations.
#[derive(Default)]
pub struct StationLog {
    stations: Vec<Station>,
    paths: Vec<StationPath>,
}

impl StationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a station and connects it to the previous one.
    ///
    /// Returns the new station's number.
    pub fn add_station(&mut self, position: GeoCoordinate) -> usize {
        let number = self.stations.len() + 1;

        if let Some(previous) = self.stations.last() {
            let arc = build_arc(previous.position, position);
            let distance = distance_km(previous.position, position);
            log::debug!(
                "Built path {} -> {} ({} points, {:.0} km)",
                previous.number,
                number,
                arc.len(),
                distance
            );
            self.paths.push(StationPath {
                from: previous.number,
                to: number,
                arc,
                distance_km: distance,
            });
        }

        self.stations.push(Station { number, position });
        log::info!("Placed station {} at {}", number, position);
        number
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn paths(&self) -> &[StationPath] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Sum of all path distances in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.paths.iter().map(|p| p.distance_km).sum()
    }

    /// Removes all stations and paths.
    pub fn clear(&mut self) {
        log::info!("Clearing {} stations", self.stations.len());
        self.stations.clear();
        self.paths.clear();
    }
}
