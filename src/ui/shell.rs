//! Page Shell
//!
//! The full HTML document served on direct navigation: head assets, the
//! persistent sidebar and the `#main-area` content slot. Partial-swap
//! requests get the bare fragment instead.

use askama::Template;

use super::classes::{Theme, THEME};

/// Sidebar branding label
pub const BRAND: &str = "Enterprise OS";

/// A sidebar navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Sidebar navigation, top to bottom
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        href: "/dashboard",
        label: "Dashboard",
    },
    NavLink {
        href: "/reports",
        label: "Reports",
    },
];

#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    title: &'a str,
    brand: &'static str,
    nav: &'static [NavLink],
    content: &'a str,
    ui: &'static Theme,
}

/// Wrap a rendered fragment in the full page shell
///
/// `fragment` is inserted into `#main-area` verbatim.
pub fn render_shell(title: &str, fragment: &str) -> askama::Result<String> {
    ShellTemplate {
        title,
        brand: BRAND,
        nav: &NAV_LINKS,
        content: fragment,
        ui: &THEME,
    }
    .render()
}

/// Body-only response for partial swaps
pub fn render_fragment(fragment: String) -> String {
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_wraps_fragment() {
        let html = render_shell("Dashboard", "<p id=\"probe\">hello</p>").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard</title>"));
        assert!(html.contains("<aside"));
        assert!(html.contains(BRAND));
        assert!(html.contains("id=\"main-area\""));
        assert!(html.contains("<p id=\"probe\">hello</p>"));
    }

    #[test]
    fn test_shell_navigation() {
        let html = render_shell("Reports", "").unwrap();

        assert!(html.contains("hx-boost=\"true\""));
        assert!(html.contains("hx-target=\"#main-area\""));
        assert!(html.contains("href=\"/dashboard\""));
        assert!(html.contains("href=\"/reports\""));
        assert!(html.contains(">Dashboard</a>"));
        assert!(html.contains(">Reports</a>"));
    }

    #[test]
    fn test_shell_assets() {
        let html = render_shell("Reports", "").unwrap();

        assert!(html.contains("href=\"/static/style.css\""));
        assert_eq!(html.matches("htmx.min.js").count(), 1);
    }

    #[test]
    fn test_shell_escapes_title() {
        let html = render_shell("<Q&A>", "").unwrap();
        assert!(html.contains("<title>&lt;Q&amp;A&gt;</title>"));
    }

    #[test]
    fn test_fragment_is_untouched() {
        let fragment = "<h1>Reports</h1>".to_string();
        assert_eq!(render_fragment(fragment.clone()), fragment);
    }
}
