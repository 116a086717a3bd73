//! HTTP handlers for the cash ledger endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use shared::{CashTransaction, NewCashTransaction};

use crate::error::AppResult;
use crate::AppState;

/// Derived balances, recomputed from the source collections on every request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub cash_balance: f64,
    pub inventory_value: f64,
    pub total_assets: f64,
}

/// List all ledger entries
pub async fn list_cash_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CashTransaction>>> {
    let store = state.store.lock().await;
    Ok(Json(store.cash_transactions().to_vec()))
}

/// Append a manual ledger entry
pub async fn create_cash_transaction(
    State(state): State<AppState>,
    Json(input): Json<NewCashTransaction>,
) -> AppResult<Json<CashTransaction>> {
    let tx = {
        let mut store = state.store.lock().await;
        store.add_cash_transaction(input)?
    };
    state.persist();
    Ok(Json(tx))
}

/// Remove a ledger entry outright (no reversal row)
pub async fn delete_cash_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    {
        let mut store = state.store.lock().await;
        store.delete_cash_transaction(transaction_id)?;
    }
    state.persist();
    Ok(Json(()))
}

/// Get the derived balances
pub async fn get_balances(State(state): State<AppState>) -> AppResult<Json<BalanceResponse>> {
    let store = state.store.lock().await;
    Ok(Json(BalanceResponse {
        cash_balance: store.cash_balance(),
        inventory_value: store.inventory_value(),
        total_assets: store.total_assets(),
    }))
}
