use chrono::{DateTime, Utc};
use serde::Deserialize;
use walkers::Position;

use super::Location;

/// A flight as returned by the lookup endpoint: identifiers, the two
/// endpoints of the route, scheduled times and any stopovers. Received
/// from the network and never mutated afterwards.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub origin: Location,
    pub destination: Location,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub stopovers: Vec<String>,
}

impl FlightRecord {
    /// Route endpoints as map positions.
    pub fn route(&self) -> (Position, Position) {
        (self.origin.position(), self.destination.position())
    }

    /// Midpoint of the route, used to center the map on the flight.
    pub fn route_midpoint(&self) -> Position {
        let (from, to) = self.route();
        Position::from_lat_lon(
            (from.lat() + to.lat()) / 2.0,
            (from.lon() + to.lon()) / 2.0,
        )
    }
}
