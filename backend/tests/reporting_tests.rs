//! Reporting tests
//!
//! Tests for the monthly spending/profit report, dashboard metrics and the
//! CSV export:
//! - Period filtering by year and month
//! - Zero-spend users and zero-sale items are excluded
//! - Profit arithmetic against item purchase cost
//! - CSV rows carry two-decimal amounts with the currency suffix

use chrono::NaiveDate;

use cafeteria_management_backend::error::AppError;
use cafeteria_management_backend::services::reporting;
use cafeteria_management_backend::store::LedgerStore;
use shared::{NewExpense, NewItem, NewPurchase, NewUser, Snapshot, MONEY_EPSILON};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Two users, two items, sales in March and April 2023 plus one March
/// expense. Ahmed buys 2 Coffee in March (30.0); Fatma buys 1 Sandwich in
/// April (35.0).
fn reporting_store() -> LedgerStore {
    let mut store = LedgerStore::init(Snapshot::default());

    let ahmed = store
        .add_user(NewUser {
            name: "Ahmed Mohamed".to_string(),
            department: "Production".to_string(),
        })
        .unwrap();
    let fatma = store
        .add_user(NewUser {
            name: "Fatma Ali".to_string(),
            department: "Administration".to_string(),
        })
        .unwrap();

    let coffee = store
        .add_item(NewItem {
            name: "Coffee".to_string(),
            purchase_price: 10.0,
            price: 15.0,
            category: "Drinks".to_string(),
            amount: 20,
        })
        .unwrap();
    let sandwich = store
        .add_item(NewItem {
            name: "Sandwich".to_string(),
            purchase_price: 25.0,
            price: 35.0,
            category: "Food".to_string(),
            amount: 15,
        })
        .unwrap();

    store
        .add_purchase(NewPurchase {
            user_id: ahmed.id,
            item_id: coffee.id,
            quantity: 2,
            date: date(2023, 3, 15),
        })
        .unwrap();
    store
        .add_purchase(NewPurchase {
            user_id: fatma.id,
            item_id: sandwich.id,
            quantity: 1,
            date: date(2023, 4, 2),
        })
        .unwrap();

    store
        .add_expense(NewExpense {
            name: "Sugar".to_string(),
            amount: 50.0,
            date: date(2023, 3, 15),
            category: "Supplies".to_string(),
        })
        .unwrap();

    store
}

// ============================================================================
// Monthly report
// ============================================================================

#[test]
fn test_report_filters_by_year_and_month() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2023, 3).unwrap();

    assert_eq!(report.year, 2023);
    assert_eq!(report.month, 3);
    assert_eq!(report.user_totals.len(), 1);
    assert_eq!(report.user_totals[0].name, "Ahmed Mohamed");
    assert_eq!(report.user_totals[0].total_spent, 30.0);

    // Fatma's April purchase belongs to the April report
    let april = reporting::monthly_report(&store, 2023, 4).unwrap();
    assert_eq!(april.user_totals.len(), 1);
    assert_eq!(april.user_totals[0].name, "Fatma Ali");
}

#[test]
fn test_report_excludes_items_without_period_sales() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2023, 3).unwrap();

    assert_eq!(report.item_profits.len(), 1);
    let coffee = &report.item_profits[0];
    assert_eq!(coffee.name, "Coffee");
    assert_eq!(coffee.sold_quantity, 2);
    assert_eq!(coffee.revenue, 30.0);
    assert_eq!(coffee.cost, 20.0);
    assert_eq!(coffee.profit, 10.0);
    assert!((coffee.profit_margin - 50.0).abs() < MONEY_EPSILON);
}

#[test]
fn test_report_totals() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2023, 3).unwrap();

    assert_eq!(report.total_sales, 30.0);
    assert_eq!(report.total_expenses, 50.0);
    assert_eq!(report.total_profit, 10.0);
    assert_eq!(report.net_profit, -40.0);
}

#[test]
fn test_report_for_empty_month() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2024, 1).unwrap();

    assert!(report.user_totals.is_empty());
    assert!(report.item_profits.is_empty());
    assert_eq!(report.total_sales, 0.0);
    assert_eq!(report.net_profit, 0.0);
}

#[test]
fn test_report_rejects_out_of_range_month() {
    let store = reporting_store();
    for month in [0, 13] {
        let result = reporting::monthly_report(&store, 2023, month);
        assert!(matches!(result, Err(AppError::Validation { ref field, .. }) if field == "month"));
    }
}

// ============================================================================
// Dashboard metrics
// ============================================================================

#[test]
fn test_dashboard_metrics_match_store_state() {
    let store = reporting_store();
    let metrics = reporting::dashboard_metrics(&store);

    assert_eq!(metrics.user_count, 2);
    assert_eq!(metrics.item_count, 2);
    assert_eq!(metrics.purchase_count, 2);
    assert_eq!(metrics.expense_count, 1);
    assert!((metrics.cash_balance - store.cash_balance()).abs() < MONEY_EPSILON);
    assert!(
        (metrics.total_assets - (metrics.cash_balance + metrics.inventory_value)).abs()
            < MONEY_EPSILON
    );
}

// ============================================================================
// CSV export
// ============================================================================

#[test]
fn test_spending_csv_format() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2023, 3).unwrap();
    let csv = reporting::spending_csv(&report, "EGP").unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "name,department,total_spent");
    assert_eq!(lines[1], "Ahmed Mohamed,Production,30.00 EGP");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_spending_csv_empty_report_is_header_only() {
    let store = reporting_store();
    let report = reporting::monthly_report(&store, 2024, 1).unwrap();
    let csv = reporting::spending_csv(&report, "EGP").unwrap();

    assert_eq!(csv.lines().count(), 1);
}
