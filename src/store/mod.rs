//! Backoffice Store
//!
//! In-memory collections behind the reports section:
//!
//! - [`WeeklyReportRepository`]: ordered, mutable list of weekly reports
//! - [`MonthlyCatalog`]: fixed, read-only list of monthly report labels
//! - [`generate`]: quarterly report confirmation, never persisted
//!
//! Nothing here touches disk. Collections are seeded at startup and live
//! for the lifetime of the process.

pub mod error;
pub mod monthly;
pub mod quarterly;
pub mod seed;
pub mod types;
pub mod weekly;

pub use error::{StoreError, StoreResult};
pub use monthly::MonthlyCatalog;
pub use quarterly::{generate, QUARTERS};
pub use seed::{default_monthly_items, default_weekly_reports};
pub use types::{GeneratedReport, ReportStatus, WeeklyReport};
pub use weekly::WeeklyReportRepository;
