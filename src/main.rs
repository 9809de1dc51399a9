//! Persistent stopwatch - HTTP front for a restart-proof timer
//!
//! This is the main entry point for the persistent-stopwatch application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use persistent_stopwatch::{
    api::{create_router, ApiState},
    config::Config,
    engine::ElapsedTimeEngine,
    state::{LifecycleNotifier, TimerSession},
    store::FileStore,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "persistent_stopwatch={},tower_http=info",
            config.log_level()
        ))
        .init();

    info!("Starting persistent-stopwatch v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, store={}, key={}, tick={}ms",
        config.host,
        config.port,
        config.store_path.display(),
        config.key,
        config.tick_ms
    );

    let store = Arc::new(FileStore::new(&config.store_path));
    let engine = ElapsedTimeEngine::new(store, config.key.clone());

    // The process is in the foreground while it serves
    let lifecycle = LifecycleNotifier::default();
    let (session, mut disposer) =
        TimerSession::spawn_with_tick(engine, &lifecycle, config.tick_interval());

    let state = Arc::new(ApiState::new(
        session,
        lifecycle,
        config.port,
        config.host.clone(),
    ));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start             - Start the timer");
    info!("  POST /stop              - Stop the timer");
    info!("  GET  /status            - Current label and start instant");
    info!("  POST /lifecycle/:state  - Report active|inactive|background");
    info!("  GET  /health            - Health check");

    let server = axum::serve(listener, app);

    // Without a signal handler, keep serving until the server itself exits
    let shutdown = async {
        if let Err(e) = shutdown_signal().await {
            tracing::error!("Failed to install signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown => {
            info!("Shutdown signal received");
        }
    }

    disposer.dispose();
    info!("Server shutdown complete");
    Ok(())
}
