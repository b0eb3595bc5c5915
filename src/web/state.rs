//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ServerConfig};
use crate::store::{MonthlyCatalog, WeeklyReportRepository};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Weekly reports, mutated by the delete action
    pub weekly: WeeklyReportRepository,
    /// Read-only monthly report labels
    pub monthly: MonthlyCatalog,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState from prepared collections
    pub fn new(
        config: ServerConfig,
        weekly: WeeklyReportRepository,
        monthly: MonthlyCatalog,
    ) -> Self {
        Self {
            weekly,
            monthly,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create AppState seeded from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.server.clone(),
            WeeklyReportRepository::seeded(config.reports.weekly.clone()),
            MonthlyCatalog::new(config.reports.monthly.clone()),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
