use std::path::Path;

use api::HttpApi;
use logger::Logger;

pub mod animation;
pub mod api;
pub mod format;
mod map;
mod plugins;
pub mod state;
pub mod types;
mod widgets;
mod windows;

use map::TrackerApp;

const LOG_DIR: &str = "logs";

pub fn run() -> Result<(), eframe::Error> {
    let logger = match Logger::new(Path::new(LOG_DIR)) {
        Ok(logger) => Some(logger),
        Err(e) => {
            eprintln!("Running without a log file: {}", e);
            None
        }
    };

    eframe::run_native(
        "Flight Tracker",
        Default::default(),
        Box::new(|cc| {
            Ok(Box::new(TrackerApp::new(
                cc.egui_ctx.clone(),
                HttpApi::from_env(),
                logger,
            )))
        }),
    )
}
