//! Cafeteria Management Dashboard - Backend Server
//!
//! A single-tenant dashboard for running a small cafeteria: users, catalog
//! items, sales, expenses, and a cash ledger that mirrors every stock and
//! sales event. All state lives in an in-memory store; mutations queue their
//! touched collections for JSON snapshot persistence.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod storage;
pub mod store;

pub use config::Config;
pub use storage::SnapshotStorage;
pub use store::LedgerStore;

use error::AppResult;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<LedgerStore>>,
    pub storage: Arc<SnapshotStorage>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: LedgerStore, storage: SnapshotStorage, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            storage: Arc::new(storage),
            config: Arc::new(config),
        }
    }

    /// Kick off a background drain of the pending-write queue.
    ///
    /// Fire and forget: handlers return without waiting for the disk write.
    /// In-memory state stays authoritative; collections whose write failed
    /// are re-queued so the next drain retries them, and the failure is
    /// logged.
    pub fn persist(&self) {
        let store = Arc::clone(&self.store);
        let storage = Arc::clone(&self.storage);
        tokio::spawn(async move {
            if let Err(e) = drain_pending(&store, &storage).await {
                tracing::warn!("background snapshot write failed: {}", e);
            }
        });
    }

    /// Drain the pending-write queue and wait for every write to finish.
    ///
    /// Returns the number of collections written.
    pub async fn flush(&self) -> AppResult<usize> {
        drain_pending(&self.store, &self.storage).await
    }
}

async fn drain_pending(
    store: &Mutex<LedgerStore>,
    storage: &SnapshotStorage,
) -> AppResult<usize> {
    // Serialize under the lock, write after releasing it. Anything taken
    // from the queue but not yet on disk goes back on error, so a failed
    // drain can be retried.
    let batch: Vec<_> = {
        let mut store = store.lock().await;
        let dirty = store.take_dirty();
        let exported: AppResult<Vec<_>> = dirty
            .iter()
            .map(|&collection| {
                store
                    .export_collection(collection)
                    .map(|data| (collection, data))
            })
            .collect();
        match exported {
            Ok(batch) => batch,
            Err(e) => {
                for collection in dirty {
                    store.requeue(collection);
                }
                return Err(e);
            }
        }
    };

    let written = batch.len();
    for (i, (collection, data)) in batch.iter().enumerate() {
        if let Err(e) = storage.save(*collection, data).await {
            let mut store = store.lock().await;
            for (collection, _) in &batch[i..] {
                store.requeue(*collection);
            }
            return Err(e);
        }
        tracing::debug!("persisted collection {}", collection.as_str());
    }
    Ok(written)
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Cafeteria Management Dashboard API v1.0"
}
