//! Class Bundles
//!
//! Constant Tailwind class strings. Templates read them through [`THEME`].

use crate::store::ReportStatus;

pub const BTN_PRIMARY: &str =
    "bg-enterprise-blue text-white px-6 py-2 rounded-lg hover:brightness-110 transition-all active:scale-95";
pub const BTN_SECONDARY: &str =
    "bg-slate-200 text-slate-700 px-4 py-2 rounded-lg hover:bg-slate-300 transition-all";
pub const NAV_LINK: &str =
    "block p-3 rounded hover:bg-slate-800 text-slate-300 hover:text-white transition";
pub const TAB_ACTIVE: &str =
    "px-4 py-2 font-semibold border-b-2 border-enterprise-blue text-enterprise-blue";
pub const TAB_INACTIVE: &str =
    "px-4 py-2 text-slate-500 hover:text-slate-700 border-b-2 border-transparent transition";
pub const TABLE_HEADER: &str =
    "px-4 py-3 text-left text-xs font-medium text-slate-500 uppercase tracking-wider";
pub const TABLE_CELL: &str = "px-4 py-3 text-sm text-slate-700";
pub const BADGE_GREEN: &str =
    "inline-block px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-800";
pub const BADGE_YELLOW: &str =
    "inline-block px-2 py-1 text-xs font-semibold rounded-full bg-yellow-100 text-yellow-800";
pub const BADGE_RED: &str =
    "inline-block px-2 py-1 text-xs font-semibold rounded-full bg-red-100 text-red-800";
pub const INPUT: &str = "border border-slate-300 rounded-lg px-3 py-2 text-sm \
     focus:outline-none focus:ring-2 focus:ring-enterprise-blue focus:border-transparent";

/// Class bundles as template-visible fields
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub btn_primary: &'static str,
    pub btn_secondary: &'static str,
    pub nav_link: &'static str,
    pub table_header: &'static str,
    pub table_cell: &'static str,
    pub input: &'static str,
}

pub const THEME: Theme = Theme {
    btn_primary: BTN_PRIMARY,
    btn_secondary: BTN_SECONDARY,
    nav_link: NAV_LINK,
    table_header: TABLE_HEADER,
    table_cell: TABLE_CELL,
    input: INPUT,
};

/// Badge classes for a report status
pub fn badge_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Complete => BADGE_GREEN,
        ReportStatus::InReview => BADGE_YELLOW,
        ReportStatus::Draft => BADGE_RED,
    }
}

/// Classes for a tab button
pub fn tab_class(active: bool) -> &'static str {
    if active {
        TAB_ACTIVE
    } else {
        TAB_INACTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(ReportStatus::Complete), BADGE_GREEN);
        assert_eq!(badge_class(ReportStatus::InReview), BADGE_YELLOW);
        assert_eq!(badge_class(ReportStatus::Draft), BADGE_RED);
    }

    #[test]
    fn test_unrecognized_status_gets_green_badge() {
        assert_eq!(badge_class(ReportStatus::from_label("Archived")), BADGE_GREEN);
    }

    #[test]
    fn test_input_classes_are_joined_with_space() {
        assert!(INPUT.contains("text-sm focus:outline-none"));
    }
}
