//! Cafeteria Management Dashboard - server entry point

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafeteria_management_backend::{
    config::Config, create_app, AppState, LedgerStore, SnapshotStorage,
};
use shared::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "cafeteria_management_backend=debug,cms_server=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Cafeteria Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the persisted snapshot
    let storage = SnapshotStorage::new(&config.storage.data_dir);
    let snapshot = storage.load().await?;

    let store = if snapshot.is_empty() && config.storage.seed_demo_data {
        tracing::info!("Empty data directory, seeding demo data");
        let mut store = LedgerStore::init(Snapshot::demo());
        // Persist the seed immediately so restarts see the same data
        store.mark_all_dirty();
        store
    } else {
        LedgerStore::init(snapshot)
    };

    let state = AppState::new(store, storage, config.clone());
    state.flush().await?;

    // Build application
    let app = create_app(state.clone());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Final drain so nothing queued at shutdown is lost
    state.flush().await?;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
