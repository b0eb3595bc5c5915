//! Page Fragments
//!
//! One askama template per fragment. Every view renders body-only markup;
//! [`super::shell`] adds the document around it when needed.

use askama::Template;
use chrono::{DateTime, SecondsFormat, Utc};

use super::classes::{badge_class, Theme, THEME};
use super::tabs::{ReportTab, TabButton};
use crate::store::{GeneratedReport, WeeklyReport, QUARTERS};

/// Dashboard: metrics placeholder and refresh button
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardView {
    ui: &'static Theme,
}

impl DashboardView {
    pub fn new() -> Self {
        Self { ui: &THEME }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

/// "Last updated" line swapped into `#metrics`
#[derive(Template)]
#[template(path = "refresh.html")]
pub struct RefreshView {
    updated_at: String,
}

impl RefreshView {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            updated_at: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// A weekly report prepared for the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRow {
    pub row_id: String,
    /// CSS selector for the row, used as the delete button's `hx-target`
    pub target: String,
    pub delete_path: String,
    pub date: String,
    pub title: String,
    pub status: &'static str,
    pub badge: &'static str,
}

impl WeeklyRow {
    /// Element id of a report's table row
    pub fn element_id(report_id: &str) -> String {
        format!("report-{}", report_id)
    }
}

impl From<&WeeklyReport> for WeeklyRow {
    fn from(report: &WeeklyReport) -> Self {
        let row_id = Self::element_id(&report.id);
        Self {
            target: format!("#{}", css_escape(&row_id)),
            row_id,
            delete_path: format!("/api/reports/{}", urlencoding::encode(&report.id)),
            date: report.date.clone(),
            title: report.title.clone(),
            status: report.status.label(),
            badge: badge_class(report.status),
        }
    }
}

/// Escape an element id for use in a CSS id selector
///
/// ASCII letters, digits, `-`, `_` and non-ASCII characters pass through;
/// control characters become hex escapes and everything else is
/// backslash-escaped.
fn css_escape(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for c in id.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else if c.is_ascii_control() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}

fn weekly_rows(reports: &[WeeklyReport]) -> Vec<WeeklyRow> {
    reports.iter().map(WeeklyRow::from).collect()
}

/// Reports landing page: tab bar plus the weekly panel
#[derive(Template)]
#[template(path = "reports/page.html")]
pub struct ReportsPageView {
    tabs: Vec<TabButton>,
    rows: Vec<WeeklyRow>,
    ui: &'static Theme,
}

impl ReportsPageView {
    pub fn new(active: ReportTab, reports: &[WeeklyReport]) -> Self {
        Self {
            tabs: ReportTab::bar(active),
            rows: weekly_rows(reports),
            ui: &THEME,
        }
    }
}

/// Weekly reports table
#[derive(Template)]
#[template(path = "reports/weekly_table.html")]
pub struct WeeklyTableView {
    rows: Vec<WeeklyRow>,
    ui: &'static Theme,
}

impl WeeklyTableView {
    pub fn new(reports: &[WeeklyReport]) -> Self {
        Self {
            rows: weekly_rows(reports),
            ui: &THEME,
        }
    }
}

/// Monthly search panel with its initial result list
#[derive(Template)]
#[template(path = "reports/monthly_panel.html")]
pub struct MonthlyPanelView {
    query: String,
    items: Vec<String>,
    ui: &'static Theme,
}

impl MonthlyPanelView {
    pub fn new(query: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            query: query.into(),
            items,
            ui: &THEME,
        }
    }
}

/// Result list swapped into `#monthly-results`
#[derive(Template)]
#[template(path = "reports/monthly_results.html")]
pub struct MonthlyResultsView {
    items: Vec<String>,
}

impl MonthlyResultsView {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// Quarterly generation form
#[derive(Template)]
#[template(path = "reports/quarterly_form.html")]
pub struct QuarterlyFormView {
    quarters: &'static [&'static str],
    ui: &'static Theme,
}

impl QuarterlyFormView {
    pub fn new() -> Self {
        Self {
            quarters: &QUARTERS,
            ui: &THEME,
        }
    }
}

impl Default for QuarterlyFormView {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation swapped into `#form-result`
#[derive(Template)]
#[template(path = "reports/generated.html")]
pub struct GeneratedView {
    report: GeneratedReport,
}

impl GeneratedView {
    pub fn new(report: GeneratedReport) -> Self {
        Self { report }
    }
}

/// Error fragment for failed requests
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorView<'a> {
    request_id: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }
}
