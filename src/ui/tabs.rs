//! Reports Tab Bar
//!
//! Stateless: the active tab is passed in, every tab fetches its panel into
//! `#reports-content`.

use super::classes::tab_class;

/// A tab of the reports section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportTab {
    #[default]
    Weekly,
    Monthly,
    Quarterly,
}

impl ReportTab {
    /// Tabs in display order
    pub const ALL: [ReportTab; 3] = [ReportTab::Weekly, ReportTab::Monthly, ReportTab::Quarterly];

    /// Key used in the panel path
    pub fn key(&self) -> &'static str {
        match self {
            ReportTab::Weekly => "weekly",
            ReportTab::Monthly => "monthly",
            ReportTab::Quarterly => "quarterly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportTab::Weekly => "Weekly",
            ReportTab::Monthly => "Monthly",
            ReportTab::Quarterly => "Quarterly",
        }
    }

    /// Path of the fragment endpoint serving this tab's panel
    pub fn path(&self) -> String {
        format!("/reports/{}", self.key())
    }

    /// Buttons for the whole bar with `active` highlighted
    pub fn bar(active: ReportTab) -> Vec<TabButton> {
        Self::ALL
            .into_iter()
            .map(|tab| TabButton {
                label: tab.label(),
                path: tab.path(),
                css: tab_class(tab == active),
                active: tab == active,
            })
            .collect()
    }
}

/// One rendered tab button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub label: &'static str,
    pub path: String,
    pub css: &'static str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::classes::{TAB_ACTIVE, TAB_INACTIVE};

    #[test]
    fn test_bar_order_and_paths() {
        let bar = ReportTab::bar(ReportTab::Weekly);

        let labels: Vec<&str> = bar.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Weekly", "Monthly", "Quarterly"]);

        let paths: Vec<&str> = bar.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/reports/weekly", "/reports/monthly", "/reports/quarterly"]
        );
    }

    #[test]
    fn test_bar_marks_only_active_tab() {
        let bar = ReportTab::bar(ReportTab::Monthly);

        assert_eq!(bar.iter().filter(|b| b.active).count(), 1);
        assert_eq!(bar[1].css, TAB_ACTIVE);
        assert_eq!(bar[0].css, TAB_INACTIVE);
        assert_eq!(bar[2].css, TAB_INACTIVE);
    }
}
