//! Backoffice Web Server
//!
//! HTTP layer for Backoffice, built with Axum. Every response is HTML; the
//! browser side is driven by htmx attributes in the rendered markup.
//!
//! # Endpoints
//!
//! ## Pages (full shell, or fragment when `HX-Request` is present)
//! - `GET /dashboard` - Performance metrics
//! - `GET /reports` - Reports tab bar with the weekly panel
//!
//! ## Fragments
//! - `POST /api/refresh` - "Last updated" line
//! - `GET /reports/weekly` - Weekly reports table
//! - `DELETE /api/reports/:id` - Remove a weekly report (empty body)
//! - `DELETE /api/reports/generate` - Same, for the report with id `generate`
//! - `GET /reports/monthly` - Monthly search panel
//! - `GET /api/reports/monthly/search?q=` - Filtered monthly results
//! - `GET /reports/quarterly` - Quarterly generation form
//! - `POST /api/reports/generate` - Generation confirmation
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! ## Static
//! - `GET /static/*` - Files from the configured static directory
//!
//! # Example
//!
//! ```rust,ignore
//! use backoffice::config::Config;
//! use backoffice::web::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(AppState::from_config(&config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use error::{WebError, WebResult};
pub use render::{RenderContext, HX_REQUEST};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/dashboard", get(routes::dashboard::dashboard_page))
        .route("/reports", get(routes::reports::reports_page))
        .route("/reports/weekly", get(routes::reports::weekly_panel))
        .route("/reports/monthly", get(routes::reports::monthly_panel))
        .route("/reports/quarterly", get(routes::reports::quarterly_panel));

    let api_routes = Router::new()
        .route("/refresh", post(routes::dashboard::refresh))
        .route("/reports/:id", delete(routes::reports::delete_report))
        .route("/reports/monthly/search", get(routes::reports::search_monthly))
        .route(
            "/reports/generate",
            post(routes::reports::generate_report).delete(routes::reports::delete_generate_id),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_files = ServeDir::new(&state.config.static_dir);
    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    let router = page_routes
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .nest_service("/static", static_files)
        .with_state(shared_state);

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

/// CORS layer for the configured origins, if any
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            // htmx sends HX-Request, HX-Target, HX-Trigger and friends
            .allow_headers(AllowHeaders::mirror_request()),
    )
}

/// Start the server
pub async fn serve(state: AppState) -> WebResult<()> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Backoffice listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Backoffice shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
