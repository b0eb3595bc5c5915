//! Web Error Types
//!
//! Internal failures only. Bad input is never an error here: missing form
//! fields become empty strings and unknown ids are a no-op.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;
use crate::ui::ErrorView;

/// Web error types
#[derive(Error, Debug)]
pub enum WebError {
    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Store rejected an operation
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO error (listener bind, static files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WebError {
    fn code(&self) -> &'static str {
        match self {
            WebError::Render(_) => "RENDER_ERROR",
            WebError::Store(_) => "STORE_ERROR",
            WebError::Io(_) => "IO_ERROR",
            WebError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let code = self.code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = ErrorView::new(&request_id)
            .render()
            .unwrap_or_else(|_| format!("<p role=\"alert\">Internal error ({})</p>", request_id));

        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Result type for handlers
pub type WebResult<T> = Result<T, WebError>;
