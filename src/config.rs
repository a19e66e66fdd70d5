//! Settings loading
//!
//! Settings come from four layers, highest priority first:
//! 1. Command-line flags
//! 2. Environment variables (`HANOI_DISKS`, `HANOI_SPEED_MS`, read by clap)
//! 3. TOML file at `$XDG_CONFIG_HOME/hanoi-viz/config.toml`
//! 4. Built-in defaults
//!
//! ```toml
//! [puzzle]
//! disks = 4
//! speed_ms = 300
//!
//! [logging]
//! file = "/tmp/hanoi.log"
//! filter = "hanoi_viz=debug"
//! ```
//!
//! Disk count and speed outside the supported range are clamped into range,
//! the same way the input controls clamp them. A missing file is not an error.

use crate::puzzle::{
    DEFAULT_DISKS, DEFAULT_SPEED_MS, MAX_DISKS, MAX_SPEED_MS, MIN_DISKS, MIN_SPEED_MS,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `RUST_LOG` nor the file sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors that can occur when loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PuzzleToml {
    disks: Option<i64>,
    speed_ms: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggingToml {
    file: Option<PathBuf>,
    filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HanoiToml {
    puzzle: PuzzleToml,
    logging: LoggingToml,
}

/// Resolved settings for one program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub disks: u8,
    pub speed_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
    /// File the settings were read from, if any
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            disks: DEFAULT_DISKS,
            speed_ms: DEFAULT_SPEED_MS,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            config_path: None,
        }
    }
}

/// Values taken from the command line (or its environment fallbacks)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub disks: Option<i64>,
    pub speed_ms: Option<i64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Apply command-line values on top of file settings
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(disks) = overrides.disks {
            self.disks = clamp_disks(disks);
        }
        if let Some(speed) = overrides.speed_ms {
            self.speed_ms = clamp_speed(speed);
        }
        if let Some(path) = &overrides.log_file {
            self.log_file = Some(path.clone());
        }
    }

    fn apply_toml(&mut self, toml: HanoiToml) {
        if let Some(disks) = toml.puzzle.disks {
            self.disks = clamp_disks(disks);
        }
        if let Some(speed) = toml.puzzle.speed_ms {
            self.speed_ms = clamp_speed(speed);
        }
        if let Some(file) = toml.logging.file {
            self.log_file = Some(file);
        }
        if let Some(filter) = toml.logging.filter {
            self.log_filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            ConfigError::Validation(format!("bad log filter '{}': {}", self.log_filter, e))
        })?;
        if let Some(file) = &self.log_file {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::Validation("log file path is empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hanoi-viz").join("config.toml"))
}

/// Load settings from `path` over the defaults
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if a
/// value fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Some(config_path) = path {
        if config_path.exists() {
            let content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::Read {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;
            settings.apply_toml(parse_toml(&content)?);
            settings.config_path = Some(config_path.to_path_buf());
            tracing::info!(path = %config_path.display(), "loaded configuration");
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found, using defaults");
        }
    }

    settings.validate()?;
    Ok(settings)
}

fn parse_toml(content: &str) -> Result<HanoiToml, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Clamp a requested disk count into the range the UI offers
pub fn clamp_disks(requested: i64) -> u8 {
    let clamped = requested.clamp(i64::from(MIN_DISKS), i64::from(MAX_DISKS));
    if clamped != requested {
        tracing::warn!(requested, clamped, "disk count out of range");
    }
    clamped as u8
}

/// Clamp a requested pacing delay into the supported range
pub fn clamp_speed(requested: i64) -> u64 {
    let clamped = requested.clamp(MIN_SPEED_MS as i64, MAX_SPEED_MS as i64);
    if clamped != requested {
        tracing::warn!(requested, clamped, "speed out of range");
    }
    clamped as u64
}
