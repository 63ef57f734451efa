//! Command-line parameters applied at startup.
//!
//! `--station LAT,LON` (repeatable) pre-places stations in order, and
//! `--hour-offset H` starts the simulated clock shifted by `H` hours.
//! Invalid values are logged and skipped.

use geo_types::Coord;

use crate::geo::{try_geo_to_normalized_map, GeoCoordinate, GeoError};

/// Parsed launch parameters.
#[derive(Debug, Default, PartialEq)]
pub struct LaunchParams {
    pub stations: Vec<GeoCoordinate>,
    pub hour_offset: Option<f32>,
}

/// Reasons a `--station` value is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum StationArgError {
    /// Not of the form `LAT,LON` with two numbers.
    Malformed(String),
    /// Numbers parsed but do not form a placeable coordinate.
    Geo(GeoError),
}

impl std::fmt::Display for StationArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationArgError::Malformed(value) => {
                write!(f, "Expected LAT,LON but got '{}'", value)
            }
            StationArgError::Geo(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StationArgError {}

impl From<GeoError> for StationArgError {
    fn from(e: GeoError) -> Self {
        StationArgError::Geo(e)
    }
}

/// Parses `LAT,LON` into a coordinate that can be shown on the map.
pub fn parse_station(value: &str) -> Result<GeoCoordinate, StationArgError> {
    let malformed = || StationArgError::Malformed(value.to_string());

    let (lat, lon) = value.split_once(',').ok_or_else(malformed)?;
    let coord = Coord {
        x: lon.trim().parse::<f64>().map_err(|_| malformed())?,
        y: lat.trim().parse::<f64>().map_err(|_| malformed())?,
    };

    let position = GeoCoordinate::try_from(coord)?;
    // Stations beyond the projection band could never be clicked.
    try_geo_to_normalized_map(position)?;
    Ok(position)
}

/// Parse launch parameters from the process arguments.
pub fn parse_from_env() -> LaunchParams {
    parse_args(std::env::args().skip(1))
}

/// Parse launch parameters from an argument list (without the program name).
pub fn parse_args<I>(args: I) -> LaunchParams
where
    I: IntoIterator<Item = String>,
{
    let mut params = LaunchParams::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (key, inline_value) = match arg.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };

        match key.as_str() {
            "--station" | "--hour-offset" => {
                let Some(value) = inline_value.or_else(|| args.next()) else {
                    log::warn!("Missing value for {}", key);
                    continue;
                };
                if key == "--station" {
                    match parse_station(&value) {
                        Ok(position) => params.stations.push(position),
                        Err(e) => log::warn!("Skipping station argument: {}", e),
                    }
                } else {
                    match value.trim().parse::<f32>() {
                        Ok(hours) if hours.is_finite() => params.hour_offset = Some(hours),
                        _ => log::warn!("Invalid hour offset: '{}'", value),
                    }
                }
            }
            _ => log::warn!("Ignoring unknown argument: {}", key),
        }
    }

    params
}
