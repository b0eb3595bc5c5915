//! Built-in seed data
//!
//! Used when the config file does not provide its own `[reports]` section.

use super::types::{ReportStatus, WeeklyReport};

/// Weekly reports, newest first
pub fn default_weekly_reports() -> Vec<WeeklyReport> {
    vec![
        WeeklyReport::new("w1", "2025-01-27", "Sprint 12 Summary", ReportStatus::Complete),
        WeeklyReport::new("w2", "2025-01-20", "Sprint 11 Summary", ReportStatus::Complete),
        WeeklyReport::new("w3", "2025-01-13", "Sprint 10 Summary", ReportStatus::InReview),
        WeeklyReport::new("w4", "2025-01-06", "Sprint 9 Summary", ReportStatus::Draft),
    ]
}

/// Monthly report labels in calendar order
pub fn default_monthly_items() -> Vec<String> {
    [
        "January 2025 - Revenue Analysis",
        "February 2025 - Customer Acquisition",
        "March 2025 - Infrastructure Costs",
        "April 2025 - Team Performance",
        "May 2025 - Product Roadmap Review",
        "June 2025 - Mid-Year Summary",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
