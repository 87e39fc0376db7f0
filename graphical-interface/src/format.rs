use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::types::FlightRecord;

const CALENDAR_RENDER_URL: &str = "https://www.google.com/calendar/render";

/// Flight duration as `"3h 30m"`. The difference is floored to whole
/// hours and minutes. A flight that ends before it starts produces a
/// nonsensical string; the schedule is taken as-is from the backend.
pub fn duration_text(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let delta = end - start;
    format!("{}h {}m", delta.num_hours(), delta.num_minutes() % 60)
}

/// Comma-joined stopover labels, or `None` when the flight is direct so
/// the card can omit the block entirely.
pub fn stopover_text(stopovers: &[String]) -> Option<String> {
    if stopovers.is_empty() {
        None
    } else {
        Some(stopovers.join(", "))
    }
}

/// Google Calendar event-creation link for a flight.
///
/// The `dates` value carries both timestamps compacted to
/// `YYYYMMDDTHHMMSSZ` with all punctuation stripped; title, details and
/// location are percent-encoded into the query string.
pub fn calendar_export_url(flight: &FlightRecord) -> String {
    let title = format!("Flight {} {}", flight.airline, flight.flight_number);
    let details = format!(
        "Flight from {} ({}) to {} ({})",
        flight.origin.city, flight.origin.code, flight.destination.city, flight.destination.code
    );
    let location = format!("{} to {}", flight.origin.city, flight.destination.city);
    let dates = format!(
        "{}/{}",
        compact_timestamp(flight.start_time),
        compact_timestamp(flight.end_time)
    );

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &title)
        .append_pair("dates", &dates)
        .append_pair("details", &details)
        .append_pair("location", &location)
        .finish();

    format!("{}?{}", CALENDAR_RENDER_URL, query)
}

fn compact_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::types::Location;

    fn sample_flight() -> FlightRecord {
        FlightRecord {
            flight_number: "TEST1".to_string(),
            airline: "Test Airways".to_string(),
            origin: Location {
                code: "JFK".to_string(),
                city: "New York".to_string(),
                timezone: "America/New_York".to_string(),
                latitude: Some(40.6413),
                longitude: Some(-73.7781),
            },
            destination: Location {
                code: "LHR".to_string(),
                city: "London".to_string(),
                timezone: "Europe/London".to_string(),
                latitude: Some(51.47),
                longitude: Some(-0.4543),
            },
            start_time: Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2023, 10, 27, 22, 0, 0).unwrap(),
            stopovers: vec![],
        }
    }

    fn query_param(url: &str, name: &str) -> Option<String> {
        let parsed = url::Url::parse(url).expect("Generated URL should parse");
        parsed
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    #[test]
    fn test_duration_text_floors_hours_and_minutes() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 13, 30, 0).unwrap();

        assert_eq!(duration_text(start, end), "3h 30m");
    }

    #[test]
    fn test_duration_text_exact_hours() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 2, 2, 0, 59).unwrap();

        // Seconds are floored away.
        assert_eq!(duration_text(start, end), "16h 0m");
    }

    #[test]
    fn test_stopover_text_absent_when_empty() {
        assert_eq!(stopover_text(&[]), None);
    }

    #[test]
    fn test_stopover_text_joins_labels() {
        let one = vec!["DXB".to_string()];
        assert_eq!(stopover_text(&one).as_deref(), Some("DXB"));

        let two = vec!["DXB".to_string(), "DOH".to_string()];
        assert_eq!(stopover_text(&two).as_deref(), Some("DXB, DOH"));
    }

    #[test]
    fn test_calendar_url_dates_are_compacted() {
        let url = calendar_export_url(&sample_flight());

        let dates = query_param(&url, "dates").expect("dates parameter missing");
        assert_eq!(dates, "20231027T100000Z/20231027T220000Z");

        // Shape check: 8 digits, T, 6 digits, Z on both sides of the slash.
        let (start, end) = dates.split_once('/').expect("dates must contain a slash");
        for half in [start, end] {
            assert_eq!(half.len(), 16);
            assert!(half[..8].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(&half[8..9], "T");
            assert!(half[9..15].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(&half[15..], "Z");
        }
    }

    #[test]
    fn test_calendar_url_encodes_fields() {
        let url = calendar_export_url(&sample_flight());

        assert!(url.starts_with("https://www.google.com/calendar/render?action=TEMPLATE"));
        assert_eq!(
            query_param(&url, "text").as_deref(),
            Some("Flight Test Airways TEST1")
        );
        assert_eq!(
            query_param(&url, "details").as_deref(),
            Some("Flight from New York (JFK) to London (LHR)")
        );
        assert_eq!(
            query_param(&url, "location").as_deref(),
            Some("New York to London")
        );
        // Raw spaces never appear in the serialized query.
        assert!(!url.contains(' '));
    }
}
