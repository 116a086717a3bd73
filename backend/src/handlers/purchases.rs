//! HTTP handlers for purchase (sale) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::{NewPurchase, Purchase};

use crate::error::AppResult;
use crate::AppState;

/// List all purchases
pub async fn list_purchases(State(state): State<AppState>) -> AppResult<Json<Vec<Purchase>>> {
    let store = state.store.lock().await;
    Ok(Json(store.purchases().to_vec()))
}

/// Record a sale
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<NewPurchase>,
) -> AppResult<Json<Purchase>> {
    let purchase = {
        let mut store = state.store.lock().await;
        store.add_purchase(input)?
    };
    state.persist();
    Ok(Json(purchase))
}

/// Reverse a sale
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    {
        let mut store = state.store.lock().await;
        store.delete_purchase(purchase_id)?;
    }
    state.persist();
    Ok(Json(()))
}
