//! Route definitions for the Cafeteria Management Dashboard

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Passphrase gate
        .route("/gate/unlock", post(handlers::unlock))
        // User management
        .nest("/users", user_routes())
        // Catalog items and stock
        .nest("/items", item_routes())
        // Sales
        .nest("/purchases", purchase_routes())
        // Operating expenses
        .nest("/expenses", expense_routes())
        // Cash ledger
        .nest("/cash", cash_routes())
        // Reports and export
        .nest("/reports", report_routes())
        // Explicit persistence flush
        .route("/sync/flush", post(handlers::flush))
}

/// User management routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/:user_id",
            put(handlers::update_user).delete(handlers::delete_user),
        )
}

/// Catalog item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/:item_id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .route("/:item_id/inventory", put(handlers::update_item_inventory))
}

/// Purchase (sale) routes
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route("/:purchase_id", delete(handlers::delete_purchase))
}

/// Expense routes
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/:expense_id", delete(handlers::delete_expense))
}

/// Cash ledger routes
fn cash_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_cash_transactions).post(handlers::create_cash_transaction),
        )
        .route(
            "/:transaction_id",
            delete(handlers::delete_cash_transaction),
        )
        .route("/balance", get(handlers::get_balances))
}

/// Reporting routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/monthly", get(handlers::monthly_report))
        .route("/dashboard", get(handlers::dashboard))
}
