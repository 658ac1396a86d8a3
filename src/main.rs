//! Card Gallery - Main Entry Point
//!
//! Opens a window showing the card component.

use card::app::application::run_app;
use card::config::GalleryConfig;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match GalleryConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Failed to load gallery config: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting card gallery...");

    run_app(config);
}
