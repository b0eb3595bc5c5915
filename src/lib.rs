//! # Backoffice
//!
//! A server-rendered internal admin dashboard. Pages are HTML rendered on
//! the server; interactivity comes from htmx attributes that swap fragments
//! in place over plain GET/POST/DELETE requests.
//!
//! ## Features
//!
//! - **Smart responses**: one handler serves both the full page (direct
//!   navigation) and the bare fragment (htmx request)
//! - **Reports**: weekly list with delete, monthly search, quarterly
//!   generation form
//! - **In-memory store**: seeded at startup, lock-guarded for concurrent
//!   requests
//!
//! ## Modules
//!
//! - [`store`]: Report collections and generation
//! - [`ui`]: askama templates and class bundles
//! - [`web`]: Axum router, handlers and the render context
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use backoffice::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     serve(AppState::from_config(&config)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod store;
pub mod ui;
pub mod web;

// Re-export top-level types for convenience
pub use store::{
    GeneratedReport, MonthlyCatalog, ReportStatus, StoreError, StoreResult, WeeklyReport,
    WeeklyReportRepository,
};

pub use web::{build_router, serve, AppState, RenderContext, WebError, WebResult};

pub use config::{Config, ConfigError, LoggingConfig, ReportsConfig, ServerConfig};
