//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::{default_monthly_items, default_weekly_reports, WeeklyReport};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub reports: ReportsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins; empty disables the CORS layer
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Seed data for the in-memory report collections
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_weekly_reports")]
    pub weekly: Vec<WeeklyReport>,

    #[serde(default = "default_monthly_items")]
    pub monthly: Vec<String>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            weekly: default_weekly_reports(),
            monthly: default_monthly_items(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default config locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("backoffice").join("config.toml")),
            Some(PathBuf::from("/etc/backoffice/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|path| path.exists())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("BACKOFFICE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BACKOFFICE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid BACKOFFICE_PORT"),
            }
        }
        if let Some(dir) = lookup("BACKOFFICE_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("BACKOFFICE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BACKOFFICE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Backoffice Configuration
#
# Environment variables override these settings:
# - BACKOFFICE_HOST
# - BACKOFFICE_PORT
# - BACKOFFICE_STATIC_DIR
# - BACKOFFICE_LOG_LEVEL
# - BACKOFFICE_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

# Directory served under /static (style.css, htmx.min.js)
static_dir = "static"

# Allowed CORS origins (empty disables CORS)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

[reports]
# Monthly report labels, in display order
monthly = [
    "January 2025 - Revenue Analysis",
    "February 2025 - Customer Acquisition",
    "March 2025 - Infrastructure Costs",
    "April 2025 - Team Performance",
    "May 2025 - Product Roadmap Review",
    "June 2025 - Mid-Year Summary",
]

# Weekly reports, in display order. Status is one of
# "Complete", "In Review" or "Draft".
[[reports.weekly]]
id = "w1"
date = "2025-01-27"
title = "Sprint 12 Summary"
status = "Complete"

[[reports.weekly]]
id = "w2"
date = "2025-01-20"
title = "Sprint 11 Summary"
status = "Complete"

[[reports.weekly]]
id = "w3"
date = "2025-01-13"
title = "Sprint 10 Summary"
status = "In Review"

[[reports.weekly]]
id = "w4"
date = "2025-01-06"
title = "Sprint 9 Summary"
status = "Draft"
"#
    .to_string()
}
