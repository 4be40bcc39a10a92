//! Configuration management for the `TripGenie` application
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates every setting. With neither present the
//! defaults reproduce the stock demo form.

use crate::TripGenieError;
use crate::models::LabelSet;
use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "TRIPGENIE_CONFIG";

/// Root configuration structure for the `TripGenie` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripGenieConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Initial values shown in the form
    #[serde(default)]
    pub defaults: FormDefaults,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Values the form starts out with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default = "default_people_count")]
    pub people_count: u32,
    #[serde(default = "default_transport_modes")]
    pub transport_modes: LabelSet,
    #[serde(default = "default_travel_styles")]
    pub travel_styles: LabelSet,
    #[serde(default = "default_travel_themes")]
    pub travel_themes: LabelSet,
}

/// Lowest budget the form accepts
pub const MIN_BUDGET: f64 = 500.0;
/// Lowest party size the form accepts
pub const MIN_PEOPLE: u32 = 1;

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_request_timeout() -> u32 {
    30
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_origin() -> String {
    "北京".to_string()
}

fn default_destination() -> String {
    "上海".to_string()
}

fn default_start_date() -> String {
    "2024-03-15".to_string()
}

fn default_end_date() -> String {
    "2024-03-17".to_string()
}

fn default_budget() -> f64 {
    3000.0
}

fn default_people_count() -> u32 {
    2
}

fn default_transport_modes() -> LabelSet {
    ["🚄 高铁"].into_iter().collect()
}

fn default_travel_styles() -> LabelSet {
    ["📸 网红打卡"].into_iter().collect()
}

fn default_travel_themes() -> LabelSet {
    ["🍜 美食之旅"].into_iter().collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            destination: default_destination(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            budget: default_budget(),
            people_count: default_people_count(),
            transport_modes: default_transport_modes(),
            travel_styles: default_travel_styles(),
            travel_themes: default_travel_themes(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TripGenieConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from_path(explicit)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(::config::FileFormat::Toml),
            );
        }

        // Environment overrides such as TRIPGENIE_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("TRIPGENIE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripGenieConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        tracing::debug!(path = %config_file.display(), "Configuration loaded");
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripgenie").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_logging()?;
        self.validate_defaults()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(TripGenieError::config("Server host cannot be empty").into());
        }

        if self.server.port == 0 {
            return Err(TripGenieError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds == 0 || self.server.request_timeout_seconds > 300 {
            return Err(TripGenieError::config(
                "Request timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.server.max_body_bytes < 1024 || self.server.max_body_bytes > 10 * 1024 * 1024 {
            return Err(TripGenieError::config(
                "Maximum body size must be between 1 KiB and 10 MiB",
            )
            .into());
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripGenieError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripGenieError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    fn validate_defaults(&self) -> Result<()> {
        if !self.defaults.budget.is_finite() || self.defaults.budget < MIN_BUDGET {
            return Err(TripGenieError::config(format!(
                "Default budget must be at least {MIN_BUDGET}"
            ))
            .into());
        }

        if self.defaults.people_count < MIN_PEOPLE {
            return Err(TripGenieError::config(format!(
                "Default people count must be at least {MIN_PEOPLE}"
            ))
            .into());
        }

        Ok(())
    }
}
