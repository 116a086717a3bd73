//! HTTP handlers for reporting and export endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::reporting::{self, DashboardMetrics, MonthlyReport};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MonthlyReportQuery {
    pub year: i32,
    pub month: u32,
    /// "json" (default) or "csv"
    pub format: Option<String>,
}

/// Monthly spending and profit report; `format=csv` downloads the per-user
/// spending rows as a CSV attachment
pub async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> AppResult<Response> {
    let report: MonthlyReport = {
        let store = state.store.lock().await;
        reporting::monthly_report(&store, query.year, query.month)?
    };

    if query.format.as_deref() == Some("csv") {
        let csv_data = reporting::spending_csv(&report, &state.config.report.currency)?;
        let filename = format!("spending-{}-{:02}.csv", report.year, report.month);
        return Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            csv_data,
        )
            .into_response());
    }

    Ok(Json(report).into_response())
}

/// Current dashboard metrics
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardMetrics>> {
    let store = state.store.lock().await;
    Ok(Json(reporting::dashboard_metrics(&store)))
}
