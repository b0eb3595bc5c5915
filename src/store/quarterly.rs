//! Quarterly Report Generation
//!
//! Stamps a generation request with the server clock. The result is only a
//! confirmation for display; no report artifact is produced or stored.

use chrono::{DateTime, Utc};

use super::types::GeneratedReport;

/// Quarter codes offered by the generation form
pub const QUARTERS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];

/// Generate a report confirmation stamped with the current time
///
/// Inputs are taken as given; empty strings are echoed back as empty.
pub fn generate(quarter: &str, name: &str) -> GeneratedReport {
    generate_at(quarter, name, Utc::now())
}

/// Generate a report confirmation with an explicit timestamp
pub fn generate_at(quarter: &str, name: &str, created_at: DateTime<Utc>) -> GeneratedReport {
    GeneratedReport {
        quarter: quarter.to_string(),
        name: name.to_string(),
        created_at,
    }
}
