//! Request and Response Types
//!
//! Form and query inputs default every field to an empty string so that
//! missing input is echoed back rather than rejected.

use serde::{Deserialize, Serialize};

/// Query string of the monthly search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Form body of the quarterly generation endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReportForm {
    #[serde(default)]
    pub quarter: String,
    #[serde(default)]
    pub name: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy"
    pub status: String,
    /// Weekly reports currently held
    pub weekly_reports: usize,
    /// Monthly labels in the catalog
    pub monthly_items: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
