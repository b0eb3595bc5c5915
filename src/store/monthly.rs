//! Monthly Report Catalog
//!
//! Fixed, read-only sequence of monthly report labels with
//! case-insensitive substring search.

use std::sync::Arc;

use super::seed::default_monthly_items;

/// Immutable list of monthly report labels
#[derive(Debug, Clone)]
pub struct MonthlyCatalog {
    items: Arc<[String]>,
}

impl MonthlyCatalog {
    /// Create a catalog from labels, order preserved
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// All labels in catalog order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filter labels by a search query
    ///
    /// A blank query (empty or whitespace only) returns every label.
    /// Otherwise returns the labels containing `query`, ignoring case,
    /// in catalog order.
    pub fn search(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return self.items.to_vec();
        }

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl Default for MonthlyCatalog {
    fn default() -> Self {
        Self::new(default_monthly_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_everything() {
        let catalog = MonthlyCatalog::default();
        assert_eq!(catalog.search(""), catalog.items().to_vec());
        assert_eq!(catalog.search("   ").len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = MonthlyCatalog::default();

        for query in ["revenue", "REVENUE", "ReVeNuE"] {
            assert_eq!(
                catalog.search(query),
                vec!["January 2025 - Revenue Analysis".to_string()]
            );
        }
    }

    #[test]
    fn test_search_preserves_order() {
        let catalog = MonthlyCatalog::default();
        // "r" shows up in most labels
        let results = catalog.search("r");

        let positions: Vec<usize> = results
            .iter()
            .map(|r| catalog.items().iter().position(|i| i == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(results.len() > 1);
    }

    #[test]
    fn test_search_with_no_matches() {
        let catalog = MonthlyCatalog::default();
        assert!(catalog.search("payroll").is_empty());
    }

    #[test]
    fn test_search_matches_across_words() {
        let catalog = MonthlyCatalog::default();
        assert_eq!(
            catalog.search("2025 - team"),
            vec!["April 2025 - Team Performance".to_string()]
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MonthlyCatalog::new(["Alpha", "Beta"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.search("ALP"), vec!["Alpha".to_string()]);
    }
}
