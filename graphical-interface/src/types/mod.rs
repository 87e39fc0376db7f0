mod location;
pub use location::Location;

mod flight;
pub use flight::FlightRecord;
