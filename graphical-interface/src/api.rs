use std::env;
use std::fmt;

use crate::types::FlightRecord;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Errors surfaced by a flight lookup. Non-2xx statuses discard the
/// response body; transport and decode failures keep the underlying
/// message so it can be shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadStatus(u16),
    Network(String),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadStatus(status) => write!(f, "flight lookup returned status {}", status),
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

/// A trait that defines the required methods for a provider of flight
/// data. This trait is implemented by any structure that can look up a
/// flight record by its number for the graphical interface.
pub trait Provider {
    fn get_flight(&self, number: &str) -> Result<FlightRecord, ApiError>;
}

/// Flight lookup over HTTP against the tracker backend.
///
/// `HttpApi` issues exactly one `GET {base}/api/flights/{number}` per
/// call: no extra headers, no query parameters, no timeout and no retry.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Builds the client from the `FLIGHT_API_URL` environment variable,
    /// falling back to the local development backend.
    pub fn from_env() -> Self {
        let base_url = env::var("FLIGHT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    fn flight_url(&self, number: &str) -> String {
        format!(
            "{}/api/flights/{}",
            self.base_url.trim_end_matches('/'),
            number
        )
    }
}

impl Provider for HttpApi {
    fn get_flight(&self, number: &str) -> Result<FlightRecord, ApiError> {
        let response = self
            .client
            .get(self.flight_url(number))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus(status.as_u16()));
        }

        response
            .json::<FlightRecord>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIGHT_JSON: &str = r#"{
        "flight_number": "TEST1",
        "airline": "Test Airways",
        "origin": {
            "code": "JFK",
            "city": "New York",
            "timezone": "America/New_York",
            "latitude": 40.6413,
            "longitude": -73.7781
        },
        "destination": {
            "code": "LHR",
            "city": "London",
            "timezone": "Europe/London",
            "latitude": 51.47,
            "longitude": -0.4543
        },
        "start_time": "2023-10-27T10:00:00+00:00",
        "end_time": "2023-10-27T22:00:00+00:00",
        "stopovers": []
    }"#;

    #[test]
    fn test_deserialize_flight_record() {
        let flight: FlightRecord =
            serde_json::from_str(FLIGHT_JSON).expect("Failed to parse flight record");

        assert_eq!(flight.flight_number, "TEST1");
        assert_eq!(flight.airline, "Test Airways");
        assert_eq!(flight.origin.code, "JFK");
        assert_eq!(flight.destination.city, "London");
        assert_eq!(flight.origin.latitude, Some(40.6413));
        assert!(flight.stopovers.is_empty());
        assert_eq!(
            (flight.end_time - flight.start_time).num_hours(),
            12,
            "Expected a twelve hour flight, got {:?}",
            flight.end_time - flight.start_time
        );
    }

    #[test]
    fn test_deserialize_rejects_missing_fields() {
        let truncated = r#"{"flight_number": "TEST1", "airline": "Test Airways"}"#;
        let result = serde_json::from_str::<FlightRecord>(truncated);
        assert!(result.is_err(), "Truncated body should fail to parse");
    }

    #[test]
    fn test_null_coordinate_becomes_absent() {
        let json = FLIGHT_JSON.replace("40.6413", "null");
        let flight: FlightRecord = serde_json::from_str(&json).expect("Failed to parse");

        assert_eq!(flight.origin.latitude, None);
        assert!(!flight.origin.has_coordinates());
        // Absent latitude falls back to the 0,0 default on the map.
        assert_eq!(flight.origin.position().lat(), 0.0);
    }

    #[test]
    fn test_zero_coordinate_is_preserved() {
        let json = FLIGHT_JSON.replace("40.6413", "0.0");
        let flight: FlightRecord = serde_json::from_str(&json).expect("Failed to parse");

        assert_eq!(flight.origin.latitude, Some(0.0));
        assert!(flight.origin.has_coordinates());
        assert_eq!(flight.origin.position().lon(), -73.7781);
    }

    #[test]
    fn test_flight_url_strips_trailing_slash() {
        let api = HttpApi::new("http://127.0.0.1:5000/");
        assert_eq!(
            api.flight_url("AA123"),
            "http://127.0.0.1:5000/api/flights/AA123"
        );
    }
}
