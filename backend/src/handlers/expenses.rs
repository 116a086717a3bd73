//! HTTP handlers for expense endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use shared::{Expense, NewExpense};

use crate::error::AppResult;
use crate::AppState;

/// List all expenses
pub async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let store = state.store.lock().await;
    Ok(Json(store.expenses().to_vec()))
}

/// Record an expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(input): Json<NewExpense>,
) -> AppResult<Json<Expense>> {
    let expense = {
        let mut store = state.store.lock().await;
        store.add_expense(input)?
    };
    state.persist();
    Ok(Json(expense))
}

/// Remove an expense, refunding its amount to the ledger
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    {
        let mut store = state.store.lock().await;
        store.delete_expense(expense_id)?;
    }
    state.persist();
    Ok(Json(()))
}
