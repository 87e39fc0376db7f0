mod flight;
mod search;

pub use flight::WidgetFlight;
pub use search::WidgetSearch;
