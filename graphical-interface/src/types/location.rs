use serde::Deserialize;
use walkers::Position;

/// One endpoint of a flight: airport code, city, timezone label and an
/// optional geographical position.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub code: String,
    pub city: String,
    pub timezone: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    /// Map position of this location. An absent coordinate falls back to
    /// `0.0`; a coordinate that is really `0.0` (equator, prime meridian)
    /// is kept as-is.
    pub fn position(&self) -> Position {
        Position::from_lat_lon(
            self.latitude.unwrap_or(0.0),
            self.longitude.unwrap_or(0.0),
        )
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
