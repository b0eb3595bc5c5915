//! Report data types
//!
//! Weekly reports, their review status, and the confirmation produced when a
//! quarterly report is generated.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::StoreError;

/// Review status of a weekly report
///
/// Serialized as its display label. Deserialization never fails: an
/// unrecognized label resolves to the default status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    /// Published
    #[default]
    Complete,
    /// Waiting on a reviewer
    InReview,
    /// Not yet submitted
    Draft,
}

impl ReportStatus {
    /// All statuses in display order
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Complete,
        ReportStatus::InReview,
        ReportStatus::Draft,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Complete => "Complete",
            ReportStatus::InReview => "In Review",
            ReportStatus::Draft => "Draft",
        }
    }

    /// Parse a label, falling back to the default status when unrecognized
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!(status = %label, "Unrecognized report status, using default");
            Self::default()
        })
    }
}

impl FromStr for ReportStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(s)
                    || format!("{:?}", status).eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| StoreError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ReportStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        status.label().to_string()
    }
}

/// A weekly report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Unique, stable identifier
    pub id: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub status: ReportStatus,
}

impl WeeklyReport {
    /// Create a new weekly report
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
        status: ReportStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            title: title.into(),
            status,
        }
    }
}

/// Confirmation of a quarterly report generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReport {
    pub quarter: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedReport {
    /// Creation instant as ISO-8601 with a `Z` suffix
    pub fn timestamp(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Plain-text confirmation line
    pub fn message(&self) -> String {
        format!(
            "\"{}\" for {} created at {}",
            self.name,
            self.quarter,
            self.timestamp()
        )
    }
}
