//! HTTP handlers for catalog item endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::{Item, NewItem};

use crate::error::AppResult;
use crate::AppState;

/// Payload for the inventory-only update endpoint
#[derive(Debug, Deserialize)]
pub struct InventoryUpdate {
    pub amount: i64,
}

/// List all catalog items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let store = state.store.lock().await;
    Ok(Json(store.items().to_vec()))
}

/// Create an item; non-zero initial stock is booked as a stock purchase
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<NewItem>,
) -> AppResult<Json<Item>> {
    let item = {
        let mut store = state.store.lock().await;
        store.add_item(input)?
    };
    state.persist();
    Ok(Json(item))
}

/// Update an item; stock deltas are mirrored into the cash ledger
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(input): Json<NewItem>,
) -> AppResult<Json<Item>> {
    let item = {
        let mut store = state.store.lock().await;
        store.update_item(item_id, input)?
    };
    state.persist();
    Ok(Json(item))
}

/// Set an item's on-hand amount only
pub async fn update_item_inventory(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(input): Json<InventoryUpdate>,
) -> AppResult<Json<Item>> {
    let item = {
        let mut store = state.store.lock().await;
        store.update_item_inventory(item_id, input.amount)?
    };
    state.persist();
    Ok(Json(item))
}

/// Delete an item (blocked while purchases reference it); remaining stock
/// value is refunded as a deposit
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    {
        let mut store = state.store.lock().await;
        store.delete_item(item_id)?;
    }
    state.persist();
    Ok(Json(()))
}
