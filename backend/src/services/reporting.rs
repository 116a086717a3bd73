//! Reporting service for analytics and data export
//! Provides monthly spending and profit reports plus dashboard metrics

use chrono::Datelike;
use serde::Serialize;
use uuid::Uuid;

use shared::format_money;

use crate::error::{AppError, AppResult};
use crate::store::LedgerStore;

/// Per-user spending for the selected period
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSpendingRow {
    pub user_id: Uuid,
    pub name: String,
    pub department: String,
    pub total_spent: f64,
}

/// Per-item sales and profit for the selected period
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProfitRow {
    pub item_id: Uuid,
    pub name: String,
    pub category: String,
    pub sold_quantity: i64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    /// Profit as a percentage of cost; zero when nothing was spent
    pub profit_margin: f64,
}

/// Monthly report over purchases and expenses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub user_totals: Vec<UserSpendingRow>,
    pub item_profits: Vec<ItemProfitRow>,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub net_profit: f64,
}

/// Dashboard metrics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub cash_balance: f64,
    pub inventory_value: f64,
    pub total_assets: f64,
    pub user_count: usize,
    pub item_count: usize,
    pub purchase_count: usize,
    pub expense_count: usize,
}

/// Build the monthly report for the given year and month (1-12).
///
/// Users without period spend and items without period sales are excluded.
pub fn monthly_report(store: &LedgerStore, year: i32, month: u32) -> AppResult<MonthlyReport> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation {
            field: "month".to_string(),
            message: "Month must be between 1 and 12".to_string(),
            message_ar: "الشهر يجب أن يكون بين 1 و12".to_string(),
        });
    }

    let in_period =
        |date: chrono::NaiveDate| date.year() == year && date.month() == month;

    let period_purchases: Vec<_> = store
        .purchases()
        .iter()
        .filter(|p| in_period(p.date))
        .collect();

    let user_totals: Vec<UserSpendingRow> = store
        .users()
        .iter()
        .map(|user| {
            let total_spent: f64 = period_purchases
                .iter()
                .filter(|p| p.user_id == user.id)
                .map(|p| p.total)
                .sum();
            UserSpendingRow {
                user_id: user.id,
                name: user.name.clone(),
                department: user.department.clone(),
                total_spent,
            }
        })
        .filter(|row| row.total_spent > 0.0)
        .collect();

    let item_profits: Vec<ItemProfitRow> = store
        .items()
        .iter()
        .map(|item| {
            let item_purchases: Vec<_> = period_purchases
                .iter()
                .filter(|p| p.item_id == item.id)
                .collect();
            let sold_quantity: i64 = item_purchases.iter().map(|p| p.quantity).sum();
            let revenue: f64 = item_purchases.iter().map(|p| p.total).sum();
            let cost = sold_quantity as f64 * item.purchase_price;
            let profit = revenue - cost;
            ItemProfitRow {
                item_id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                sold_quantity,
                revenue,
                cost,
                profit,
                profit_margin: if cost > 0.0 { profit / cost * 100.0 } else { 0.0 },
            }
        })
        .filter(|row| row.sold_quantity > 0)
        .collect();

    let total_sales: f64 = user_totals.iter().map(|row| row.total_spent).sum();
    let total_expenses: f64 = store
        .expenses()
        .iter()
        .filter(|e| in_period(e.date))
        .map(|e| e.amount)
        .sum();
    let total_profit: f64 = item_profits.iter().map(|row| row.profit).sum();

    Ok(MonthlyReport {
        year,
        month,
        user_totals,
        item_profits,
        total_sales,
        total_expenses,
        total_profit,
        net_profit: total_profit - total_expenses,
    })
}

/// Collect dashboard metrics from the current store state.
pub fn dashboard_metrics(store: &LedgerStore) -> DashboardMetrics {
    DashboardMetrics {
        cash_balance: store.cash_balance(),
        inventory_value: store.inventory_value(),
        total_assets: store.total_assets(),
        user_count: store.users().len(),
        item_count: store.items().len(),
        purchase_count: store.purchases().len(),
        expense_count: store.expenses().len(),
    }
}

/// Export the per-user spending rows as CSV: `name,department,total_spent`
/// with amounts rendered to two decimals plus the currency suffix.
pub fn spending_csv(report: &MonthlyReport, currency: &str) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["name", "department", "total_spent"])
        .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    for row in &report.user_totals {
        wtr.write_record([
            row.name.as_str(),
            row.department.as_str(),
            &format_money(row.total_spent, currency),
        ])
        .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}
