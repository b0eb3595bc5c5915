//! Smart Responses
//!
//! Every full-page route renders its fragment once and lets the
//! [`RenderContext`] decide the shape of the response: the bare fragment for
//! htmx partial swaps, the full shell for direct navigation.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderName, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use super::error::WebResult;
use crate::ui::{render_fragment, render_shell};

/// Header htmx adds to every request it issues
pub const HX_REQUEST: HeaderName = HeaderName::from_static("hx-request");

/// How a page fragment should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    /// Direct navigation; wrap the fragment in the shell
    Page,
    /// Partial-swap request; send the fragment alone
    Partial,
}

impl RenderContext {
    /// Presence of `HX-Request` marks a partial swap, whatever its value
    pub fn from_headers(headers: &HeaderMap) -> Self {
        if headers.contains_key(HX_REQUEST) {
            RenderContext::Partial
        } else {
            RenderContext::Page
        }
    }

    pub fn is_partial(self) -> bool {
        self == RenderContext::Partial
    }

    /// Shape a rendered fragment for this context
    pub fn render(self, title: &str, fragment: String) -> askama::Result<String> {
        match self {
            RenderContext::Partial => Ok(render_fragment(fragment)),
            RenderContext::Page => render_shell(title, &fragment),
        }
    }

    /// Build the HTML response for a fragment
    ///
    /// The body depends on `HX-Request`, so the response varies on it.
    pub fn respond(self, title: &str, fragment: String) -> WebResult<Response> {
        let body = self.render(title, fragment)?;

        Ok((
            [(header::VARY, HeaderValue::from_static("HX-Request"))],
            Html(body),
        )
            .into_response())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RenderContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(RenderContext::from_headers(&headers), RenderContext::Page);

        headers.insert(HX_REQUEST, HeaderValue::from_static("true"));
        assert_eq!(RenderContext::from_headers(&headers), RenderContext::Partial);
    }

    #[test]
    fn test_marker_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"HX-Request").unwrap(),
            HeaderValue::from_static("false"),
        );
        assert!(RenderContext::from_headers(&headers).is_partial());
    }

    #[test]
    fn test_render_partial_is_bare() {
        let html = RenderContext::Partial
            .render("Dashboard", "<h1>Hi</h1>".to_string())
            .unwrap();
        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[test]
    fn test_render_page_has_shell() {
        let html = RenderContext::Page
            .render("Dashboard", "<h1>Hi</h1>".to_string())
            .unwrap();
        assert!(html.contains("<aside"));
        assert!(html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_respond_sets_vary() {
        let response = RenderContext::Page
            .respond("Dashboard", String::new())
            .unwrap();
        assert_eq!(response.headers()[header::VARY], "HX-Request");
    }
}
