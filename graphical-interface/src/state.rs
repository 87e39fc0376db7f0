use crate::api::ApiError;
use crate::types::FlightRecord;

/// Message shown whenever the backend answers with a non-success status.
/// The original response body is discarded.
pub const NO_FLIGHTS_MESSAGE: &str = "No flights found for that number.";

/// The lifecycle stage of a flight search. The fetched record exists only
/// in `Success` and the error message only in `Failed`, so the phases are
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success(FlightRecord),
    Failed(String),
}

/// Tracks the state of the flight search: the query text, the current
/// phase and the generation counter used to discard stale completions.
///
/// Every submission gets a fresh generation id. A completion may only
/// commit its result while its generation is still the current one, so
/// overlapping searches cannot overwrite each other out of order.
pub struct SearchState {
    pub query: String,
    phase: SearchPhase,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            generation: 0,
        }
    }

    /// Starts a new search: clears any previous result or error, moves to
    /// `Loading` and returns the generation id the completion must carry.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        self.generation
    }

    /// Commits the outcome of a search. A stale generation is discarded
    /// and leaves the state untouched. Returns whether the outcome was
    /// committed.
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<FlightRecord, ApiError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.phase = match outcome {
            Ok(flight) => SearchPhase::Success(flight),
            Err(ApiError::BadStatus(_)) => SearchPhase::Failed(NO_FLIGHTS_MESSAGE.to_string()),
            Err(error) => SearchPhase::Failed(error.to_string()),
        };

        true
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }

    pub fn flight(&self) -> Option<&FlightRecord> {
        match &self.phase {
            SearchPhase::Success(flight) => Some(flight),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
