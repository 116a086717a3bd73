//! Purchase (sales transaction) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed sale of an item to a user
///
/// `total` snapshots the item's sale price at creation time and is never
/// recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub date: NaiveDate,
    pub total: f64,
}

/// Draft purchase before the id and total are assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchase {
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub date: NaiveDate,
}
