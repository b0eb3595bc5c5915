//! Backoffice Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Config file (first found): `--config PATH`, `~/.config/backoffice/config.toml`,
//! `/etc/backoffice/config.toml`, `./config.toml`.
//!
//! Environment variables:
//! - `BACKOFFICE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BACKOFFICE_PORT`: Port to listen on (default: 8080)
//! - `BACKOFFICE_STATIC_DIR`: Static asset directory (default: static)
//! - `BACKOFFICE_LOG_LEVEL`: Log level (default: info)
//! - `BACKOFFICE_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use backoffice::config::{generate_default_config, Config, LoggingConfig};
use backoffice::web::{serve, AppState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Internal admin dashboard server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => run_server(cli.config, host, port).await,
        Commands::Config { output } => write_default_config(output),
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let config_path = config_path.or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env(),
    };

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Backoffice v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Static directory: {:?}", config.server.static_dir);
    if !config.server.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {:?} not found, /static will answer 404",
            config.server.static_dir
        );
    }

    let state = AppState::from_config(&config);
    let weekly_reports = state.weekly.len().await;
    tracing::info!(
        weekly_reports,
        monthly_items = state.monthly.len(),
        "Report collections seeded"
    );

    serve(state).await.context("server error")?;

    tracing::info!("Backoffice stopped");
    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("backoffice={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn write_default_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();

    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}
