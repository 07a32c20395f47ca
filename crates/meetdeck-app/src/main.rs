mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("meetdeck=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "meetdeck=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("MeetDeck v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            meetdeck_config::loader::load_from_path(std::path::Path::new(path))
        }
        None => meetdeck_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        meetdeck_config::schema::ShellConfig::default()
    });

    if let Some(ref room) = args.room {
        tracing::info!("Opening room: {room}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::ShellApp::new(config, args.room);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
