//! Snapshot persistence backend
//!
//! Stores each collection as one JSON document under the configured data
//! directory (`users.json`, `items.json`, ...). The store stays agnostic to
//! this layout: it only sees the `load`/`save` snapshot contract. Writes are
//! whole-collection rewrites; in-memory state remains authoritative even if
//! a write fails.

use std::path::{Path, PathBuf};

use shared::{CashTransaction, Expense, Item, Purchase, Snapshot, User};

use crate::error::{AppError, AppResult};
use crate::store::Collection;

/// File-based snapshot storage, one JSON file per collection.
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    dir: PathBuf,
}

impl SnapshotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.as_str()))
    }

    /// Load the full snapshot. Missing collection files default to empty
    /// sequences, so a fresh data directory loads as an empty snapshot.
    pub async fn load(&self) -> AppResult<Snapshot> {
        Ok(Snapshot {
            users: self.load_collection::<User>(Collection::Users).await?,
            items: self.load_collection::<Item>(Collection::Items).await?,
            purchases: self.load_collection::<Purchase>(Collection::Purchases).await?,
            expenses: self.load_collection::<Expense>(Collection::Expenses).await?,
            cash_transactions: self
                .load_collection::<CashTransaction>(Collection::CashTransactions)
                .await?,
        })
    }

    /// Rewrite one collection document with the given data.
    pub async fn save(&self, collection: Collection, data: &serde_json::Value) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Storage(format!("cannot create data directory: {}", e))
        })?;

        let bytes = serde_json::to_vec_pretty(data)
            .map_err(|e| AppError::Storage(format!("cannot serialize {}: {}", collection.as_str(), e)))?;

        tokio::fs::write(self.collection_path(collection), bytes)
            .await
            .map_err(|e| {
                AppError::Storage(format!("cannot write {}: {}", collection.as_str(), e))
            })?;

        Ok(())
    }

    async fn load_collection<T: serde::de::DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> AppResult<Vec<T>> {
        let path = self.collection_path(collection);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Storage(format!("corrupt {} document: {}", collection.as_str(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Storage(format!(
                "cannot read {}: {}",
                collection.as_str(),
                e
            ))),
        }
    }
}
