//! Weekly Report Repository
//!
//! Process-wide ordered collection of weekly reports. Insertion order is
//! display order. Thread-safe via Tokio's async RwLock; readers get a
//! snapshot so rendering never observes a half-applied removal.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::{StoreError, StoreResult};
use super::types::WeeklyReport;

/// Shared handle to the weekly report collection
#[derive(Debug, Clone, Default)]
pub struct WeeklyReportRepository {
    reports: Arc<RwLock<Vec<WeeklyReport>>>,
}

impl WeeklyReportRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from seed data
    ///
    /// Seed entries whose id is already present are skipped.
    pub fn seeded(seed: impl IntoIterator<Item = WeeklyReport>) -> Self {
        let mut reports: Vec<WeeklyReport> = Vec::new();

        for report in seed {
            if reports.iter().any(|r| r.id == report.id) {
                tracing::warn!(report_id = %report.id, "Skipping duplicate weekly report in seed");
                continue;
            }
            reports.push(report);
        }

        Self {
            reports: Arc::new(RwLock::new(reports)),
        }
    }

    /// Snapshot of all reports in display order
    pub async fn list(&self) -> Vec<WeeklyReport> {
        self.reports.read().await.clone()
    }

    /// Number of reports currently held
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Append a report
    pub async fn add(&self, report: WeeklyReport) -> StoreResult<()> {
        let mut reports = self.reports.write().await;

        if reports.iter().any(|r| r.id == report.id) {
            return Err(StoreError::DuplicateId(report.id));
        }

        reports.push(report);
        Ok(())
    }

    /// Remove the report with the given id
    ///
    /// Returns the removed report, or `None` if no report matched.
    pub async fn remove(&self, id: &str) -> Option<WeeklyReport> {
        let mut reports = self.reports.write().await;
        let position = reports.iter().position(|r| r.id == id)?;
        Some(reports.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::default_weekly_reports;
    use crate::store::types::ReportStatus;

    fn ids(reports: &[WeeklyReport]) -> Vec<&str> {
        reports.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_preserves_seed_order() {
        let repo = WeeklyReportRepository::seeded(default_weekly_reports());
        let reports = repo.list().await;
        assert_eq!(ids(&reports), vec!["w1", "w2", "w3", "w4"]);
    }

    #[tokio::test]
    async fn test_remove_middle_report() {
        let repo = WeeklyReportRepository::seeded(default_weekly_reports());

        let removed = repo.remove("w3").await.unwrap();
        assert_eq!(removed.title, "Sprint 10 Summary");

        let reports = repo.list().await;
        assert_eq!(ids(&reports), vec!["w1", "w2", "w4"]);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let repo = WeeklyReportRepository::seeded(default_weekly_reports());

        assert!(repo.remove("w2").await.is_some());
        assert!(repo.remove("w2").await.is_none());
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let repo = WeeklyReportRepository::seeded(default_weekly_reports());

        assert!(repo.remove("does-not-exist").await.is_none());
        assert_eq!(ids(&repo.list().await), vec!["w1", "w2", "w3", "w4"]);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_id() {
        let repo = WeeklyReportRepository::new();
        assert_eq!(repo.len().await, 0);

        repo.add(WeeklyReport::new("w5", "2025-02-03", "Sprint 13", ReportStatus::Draft))
            .await
            .unwrap();

        let err = repo
            .add(WeeklyReport::new("w5", "2025-02-10", "Sprint 14", ReportStatus::Draft))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("w5".to_string()));

        let reports = repo.list().await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].title, "Sprint 13");
    }

    #[tokio::test]
    async fn test_seed_skips_duplicates() {
        let mut seed = default_weekly_reports();
        seed.push(WeeklyReport::new("w1", "2024-12-30", "Stale copy", ReportStatus::Draft));

        let repo = WeeklyReportRepository::seeded(seed);
        let reports = repo.list().await;
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].title, "Sprint 12 Summary");
    }

    #[tokio::test]
    async fn test_concurrent_removals() {
        let repo = WeeklyReportRepository::seeded(default_weekly_reports());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move { repo.remove("w1").await.is_some() }));
        }

        let mut removed = 0;
        for handle in handles {
            if handle.await.unwrap() {
                removed += 1;
            }
        }

        assert_eq!(removed, 1);
        assert_eq!(ids(&repo.list().await), vec!["w2", "w3", "w4"]);
    }
}
