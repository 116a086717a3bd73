//! Catalog item models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product with purchase cost, sale price and on-hand quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    /// Unit cost paid when stocking the item
    pub purchase_price: f64,
    /// Unit sale price charged on purchases
    pub price: f64,
    pub category: String,
    /// On-hand stock quantity, never negative
    pub amount: i64,
}

/// Draft item record before an id is assigned; also the update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub purchase_price: f64,
    pub price: f64,
    pub category: String,
    pub amount: i64,
}
