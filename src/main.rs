/// Main entry point for the flight tracker.
///
/// Starts the graphical interface. The backend base URL can be
/// overridden with the `FLIGHT_API_URL` environment variable.
fn main() {
    if let Err(e) = graphical_interface::run() {
        eprintln!("Failed to start the flight tracker: {}", e);
        std::process::exit(1);
    }
}
