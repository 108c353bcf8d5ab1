//! Customer List GUI Client - Main Entry Point

use customer_list::app::application::run_app;
use customer_list::logging::init_logging;

fn main() {
    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging();

    tracing::info!("Starting Customer List...");

    // Run the GPUI application
    run_app();
}
