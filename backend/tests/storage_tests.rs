//! Snapshot persistence tests
//!
//! Tests for the JSON file-per-collection backend and the application-level
//! pending-write drain:
//! - Save/load round trips through the data directory
//! - Missing files load as empty collections
//! - Corrupt documents surface as storage errors
//! - `flush` writes exactly the queued collections

use std::path::PathBuf;

use uuid::Uuid;

use cafeteria_management_backend::config::{
    Config, GateConfig, ReportConfig, ServerConfig, StorageConfig,
};
use cafeteria_management_backend::error::AppError;
use cafeteria_management_backend::store::{Collection, LedgerStore};
use cafeteria_management_backend::{AppState, SnapshotStorage};
use shared::{NewUser, Snapshot};

fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("cms-storage-test-{}", Uuid::new_v4()))
}

fn test_config(data_dir: &PathBuf) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        storage: StorageConfig {
            data_dir: data_dir.to_string_lossy().into_owned(),
            seed_demo_data: false,
        },
        gate: GateConfig {
            passphrase: "P@ssw0rd".to_string(),
        },
        report: ReportConfig {
            currency: "EGP".to_string(),
        },
    }
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let dir = temp_data_dir();
    let storage = SnapshotStorage::new(&dir);

    let mut store = LedgerStore::init(Snapshot::demo());
    store.mark_all_dirty();
    for collection in store.take_dirty() {
        let data = store.export_collection(collection).unwrap();
        storage.save(collection, &data).await.unwrap();
    }

    let loaded = storage.load().await.unwrap();
    let original = store.snapshot();
    assert_eq!(loaded.users.len(), original.users.len());
    assert_eq!(loaded.items.len(), original.items.len());
    assert_eq!(loaded.purchases.len(), original.purchases.len());
    assert_eq!(loaded.expenses.len(), original.expenses.len());
    assert_eq!(
        loaded.cash_transactions.len(),
        original.cash_transactions.len()
    );
    assert_eq!(loaded.users[0].id, original.users[0].id);
    assert_eq!(loaded.items[0].purchase_price, original.items[0].purchase_price);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_missing_files_load_as_empty_snapshot() {
    let storage = SnapshotStorage::new(temp_data_dir());
    let snapshot = storage.load().await.unwrap();
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn test_partial_data_dir_loads_remaining_collections() {
    let dir = temp_data_dir();
    let storage = SnapshotStorage::new(&dir);

    let mut store = LedgerStore::init(Snapshot::default());
    store
        .add_user(NewUser {
            name: "Ahmed Mohamed".to_string(),
            department: "Production".to_string(),
        })
        .unwrap();
    let data = store.export_collection(Collection::Users).unwrap();
    storage.save(Collection::Users, &data).await.unwrap();

    let loaded = storage.load().await.unwrap();
    assert_eq!(loaded.users.len(), 1);
    assert!(loaded.items.is_empty());
    assert!(loaded.cash_transactions.is_empty());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_corrupt_document_is_a_storage_error() {
    let dir = temp_data_dir();
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(dir.join("users.json"), b"{not json")
        .await
        .unwrap();

    let storage = SnapshotStorage::new(&dir);
    let result = storage.load().await;
    assert!(matches!(result, Err(AppError::Storage(_))));

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_flush_writes_queued_collections_and_drains_queue() {
    let dir = temp_data_dir();
    let state = AppState::new(
        LedgerStore::init(Snapshot::default()),
        SnapshotStorage::new(&dir),
        test_config(&dir),
    );

    {
        let mut store = state.store.lock().await;
        store
            .add_user(NewUser {
                name: "Fatma Ali".to_string(),
                department: "Administration".to_string(),
            })
            .unwrap();
    }

    let written = state.flush().await.unwrap();
    assert_eq!(written, 1);
    assert!(state.store.lock().await.pending_writes().is_empty());

    // Nothing queued means nothing written
    assert_eq!(state.flush().await.unwrap(), 0);

    let loaded = SnapshotStorage::new(&dir).load().await.unwrap();
    assert_eq!(loaded.users.len(), 1);
    assert_eq!(loaded.users[0].name, "Fatma Ali");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_failed_flush_requeues_collections_for_retry() {
    let dir = temp_data_dir();
    // A regular file where the data directory should be makes every write fail
    tokio::fs::write(&dir, b"blocker").await.unwrap();

    let state = AppState::new(
        LedgerStore::init(Snapshot::default()),
        SnapshotStorage::new(&dir),
        test_config(&dir),
    );
    {
        let mut store = state.store.lock().await;
        store
            .add_user(NewUser {
                name: "Mahmoud Khaled".to_string(),
                department: "Maintenance".to_string(),
            })
            .unwrap();
    }

    assert!(matches!(state.flush().await, Err(AppError::Storage(_))));
    // The drained entry goes back on the queue instead of being lost
    assert_eq!(
        state.store.lock().await.pending_writes(),
        &[Collection::Users]
    );

    tokio::fs::remove_file(&dir).await.unwrap();
    assert_eq!(state.flush().await.unwrap(), 1);
    assert!(state.store.lock().await.pending_writes().is_empty());

    let loaded = SnapshotStorage::new(&dir).load().await.unwrap();
    assert_eq!(loaded.users.len(), 1);
    assert_eq!(loaded.users[0].name, "Mahmoud Khaled");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
