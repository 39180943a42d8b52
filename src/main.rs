//! Pomodoro Timer - a focus/break countdown with session stats
//!
//! This is the main entry point for the pomodoro-timer application.

use tokio::net::TcpListener;
use tracing::info;

use pomodoro_timer::{
    api::create_router,
    config::Config,
    services::DesktopNotifier,
    spawn_timer,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, focus={}min, short_break={}min, long_break={}min",
          config.host, config.port, config.focus, config.short_break, config.long_break);

    let modes = config.modes()?;
    let notifier = DesktopNotifier::new(!config.no_notifications, !config.no_sound);

    // Start the timer driver and create application state
    let state = spawn_timer(
        modes,
        &config.app_name,
        config.pulse_duration(),
        notifier,
        config.port,
        config.host.clone(),
    );

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start          - Start or resume the countdown");
    info!("  POST /pause          - Pause the countdown");
    info!("  POST /reset          - Reset to the active mode's full duration");
    info!("  POST /mode/:mode_id  - Switch mode (focus, short-break, long-break)");
    info!("  GET  /modes          - List configured modes");
    info!("  GET  /status         - Timer state and rendered view");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
