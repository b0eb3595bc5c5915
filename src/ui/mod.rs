//! Backoffice UI
//!
//! Server-side HTML rendering with askama templates (see `templates/`).
//!
//! - [`classes`]: Tailwind class bundles shared by every fragment
//! - [`shell`]: full-page document with the persistent sidebar
//! - [`tabs`]: the reports tab bar
//! - [`views`]: one template per page fragment
//!
//! Fragments carry stable element ids that htmx attributes target:
//! `#main-area`, `#metrics`, `#reports-content`, `#report-{id}`,
//! `#monthly-results` and `#form-result`.

pub mod classes;
pub mod shell;
pub mod tabs;
pub mod views;

pub use classes::{badge_class, Theme, THEME};
pub use shell::{render_fragment, render_shell, NavLink, BRAND, NAV_LINKS};
pub use tabs::{ReportTab, TabButton};
pub use views::{
    DashboardView, ErrorView, GeneratedView, MonthlyPanelView, MonthlyResultsView,
    QuarterlyFormView, RefreshView, ReportsPageView, WeeklyRow, WeeklyTableView,
};
