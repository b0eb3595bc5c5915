//! Reports Routes
//!
//! - GET /reports - Tab bar plus weekly panel (smart response)
//! - GET /reports/weekly - Weekly table fragment
//! - DELETE /api/reports/:id - Remove a weekly report
//! - DELETE /api/reports/generate - Remove the weekly report with id `generate`
//! - GET /reports/monthly - Monthly search panel fragment
//! - GET /api/reports/monthly/search?q= - Filtered monthly results
//! - GET /reports/quarterly - Generation form fragment
//! - POST /api/reports/generate - Generation confirmation

use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, Response},
};
use std::sync::Arc;

use crate::store;
use crate::ui::{
    GeneratedView, MonthlyPanelView, MonthlyResultsView, QuarterlyFormView, ReportTab,
    ReportsPageView, WeeklyTableView,
};
use crate::web::dto::{GenerateReportForm, SearchParams};
use crate::web::error::WebResult;
use crate::web::render::RenderContext;
use crate::web::state::AppState;

/// GET /reports
pub async fn reports_page(
    State(state): State<Arc<AppState>>,
    ctx: RenderContext,
) -> WebResult<Response> {
    let reports = state.weekly.list().await;
    let fragment = ReportsPageView::new(ReportTab::default(), &reports).render()?;
    ctx.respond("Reports", fragment)
}

/// GET /reports/weekly
pub async fn weekly_panel(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let reports = state.weekly.list().await;
    Ok(Html(WeeklyTableView::new(&reports).render()?))
}

/// DELETE /api/reports/:id
///
/// Always answers 200 with an empty body: htmx swaps the row out with
/// nothing, and does not swap at all on 204.
pub async fn delete_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Html<&'static str> {
    remove_weekly(&state, &id).await
}

/// DELETE /api/reports/generate
///
/// The static `generate` route takes precedence over `:id`, so a weekly
/// report with that id is deleted through here.
pub async fn delete_generate_id(State(state): State<Arc<AppState>>) -> Html<&'static str> {
    remove_weekly(&state, GENERATE_SEGMENT).await
}

const GENERATE_SEGMENT: &str = "generate";

async fn remove_weekly(state: &AppState, id: &str) -> Html<&'static str> {
    match state.weekly.remove(id).await {
        Some(report) => {
            tracing::info!(report_id = %report.id, title = %report.title, "Deleted weekly report")
        }
        None => tracing::debug!(report_id = %id, "Delete requested for unknown weekly report"),
    }

    Html("")
}

/// GET /reports/monthly
pub async fn monthly_panel(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let items = state.monthly.items().to_vec();
    Ok(Html(MonthlyPanelView::new("", items).render()?))
}

/// GET /api/reports/monthly/search?q=
///
/// A missing or unparsable query string searches for nothing, which lists
/// every item.
pub async fn search_monthly(
    State(state): State<Arc<AppState>>,
    params: Option<Query<SearchParams>>,
) -> WebResult<Html<String>> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let items = state.monthly.search(&params.q);

    tracing::debug!(query = %params.q, matches = items.len(), "Monthly search");

    Ok(Html(MonthlyResultsView::new(items).render()?))
}

/// GET /reports/quarterly
pub async fn quarterly_panel() -> WebResult<Html<String>> {
    Ok(Html(QuarterlyFormView::new().render()?))
}

/// POST /api/reports/generate
///
/// Missing or malformed fields are treated as empty strings.
pub async fn generate_report(form: Option<Form<GenerateReportForm>>) -> WebResult<Html<String>> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let report = store::generate(&form.quarter, &form.name);

    tracing::info!(
        quarter = %report.quarter,
        name = %report.name,
        created_at = %report.timestamp(),
        "Generated quarterly report"
    );

    Ok(Html(GeneratedView::new(report).render()?))
}
