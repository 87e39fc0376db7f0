use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use egui::Context;
use egui_extras::install_image_loaders;
use logger::{Color, Logger};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    animation::PlaneAnimation,
    api::{ApiError, HttpApi, Provider},
    plugins,
    state::{SearchPhase, SearchState},
    types::FlightRecord,
    widgets::{WidgetFlight, WidgetSearch},
    windows,
};

const INITIAL_LAT: f64 = 30.0;
const INITIAL_LON: f64 = -30.0;
const INITIAL_ZOOM: f64 = 3.;
const FLIGHT_ZOOM: f64 = 4.;

/// Settled lookup handed back from a worker thread, tagged with the
/// generation of the submission that started it.
struct SearchOutcome {
    generation: u64,
    result: Result<FlightRecord, ApiError>,
}

/// The main application struct that manages the state and UI of the
/// flight tracker.
///
/// `TrackerApp` integrates the search bar, the flight card and the map
/// with its route and plane plugins. Lookups run on background threads
/// and report back through a channel; all state mutation happens here,
/// on the UI thread, when the outcomes are drained.
pub struct TrackerApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    api: HttpApi,
    search: SearchState,
    search_widget: WidgetSearch,
    flight_widget: Option<WidgetFlight>,
    animation: Option<PlaneAnimation>,
    outcome_tx: Sender<SearchOutcome>,
    outcome_rx: Receiver<SearchOutcome>,
    logger: Option<Logger>,
}

impl TrackerApp {
    /// Creates a new `TrackerApp` instance, initializing the map, the
    /// widgets and the outcome channel.
    pub fn new(egui_ctx: Context, api: HttpApi, logger: Option<Logger>) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        initial_map_memory.set_zoom(INITIAL_ZOOM).unwrap();

        let (outcome_tx, outcome_rx) = mpsc::channel();

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            api,
            search: SearchState::new(),
            search_widget: WidgetSearch::new(),
            flight_widget: None,
            animation: None,
            outcome_tx,
            outcome_rx,
            logger,
        }
    }

    fn log_info(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(message, Color::Cyan, true);
        }
    }

    fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.warn(message, true);
        }
    }

    /// Runs the lookup for the current query on a background thread. The
    /// worker owns its own client handle and reports back through the
    /// channel; the repaint request makes sure the settled search is
    /// rendered promptly even while the UI is idle.
    fn spawn_search(&self, ctx: &Context, generation: u64) {
        let query = self.search.query.trim().to_string();
        self.log_info(&format!("Searching for flight '{}'", query));

        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let result = api.get_flight(&query);
            // The receiver only goes away on shutdown.
            let _ = tx.send(SearchOutcome { generation, result });
            ctx.request_repaint();
        });
    }

    /// Commits settled lookups. Outcomes superseded by a newer submission
    /// are dropped by the state machine and change nothing on screen.
    fn drain_search_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if !self.search.resolve(outcome.generation, outcome.result) {
                continue;
            }

            match self.search.phase() {
                SearchPhase::Success(flight) => {
                    let flight = flight.clone();
                    self.log_info(&format!(
                        "Found flight {} {} from {} to {}",
                        flight.airline,
                        flight.flight_number,
                        flight.origin.code,
                        flight.destination.code
                    ));

                    let (from, to) = flight.route();
                    self.map_memory.center_at(flight.route_midpoint());
                    let _ = self.map_memory.set_zoom(FLIGHT_ZOOM);

                    match &mut self.animation {
                        Some(animation) => {
                            animation.retarget(from, to);
                        }
                        None => self.animation = Some(PlaneAnimation::new(from, to)),
                    }
                    self.flight_widget = Some(WidgetFlight::new(flight));
                }
                SearchPhase::Failed(message) => {
                    let message = message.clone();
                    self.log_warn(&format!("Search failed: {}", message));
                    self.flight_widget = None;
                    self.animation = None;
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_search_outcomes();

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let initial_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self.tiles.as_mut();

                let mut map = Map::new(Some(tiles), &mut self.map_memory, initial_position);

                if let Some(flight) = self.search.flight() {
                    map = map.with_plugin(plugins::Route::new(&flight.origin, &flight.destination));
                }

                if let Some(animation) = &self.animation {
                    map = map.with_plugin(plugins::PlaneMarker::new(animation));
                }

                ui.add(map);

                if let Some(generation) = self.search_widget.show(ctx, &mut self.search) {
                    self.flight_widget = None;
                    self.animation = None;
                    self.spawn_search(ctx, generation);
                }

                if let Some(widget) = &mut self.flight_widget {
                    if !widget.show(ctx) {
                        self.flight_widget = None;
                        self.animation = None;
                    }
                }

                windows::zoom(ui, &mut self.map_memory);
            });
    }
}
