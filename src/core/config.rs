//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lyriclingo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::navigation::LOADING_DELAY_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LingoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub loading_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub loading_delay_ms: u64,
    pub log_level: String,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub loading_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lyriclingo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lyriclingo").join("config.toml"))
}

/// Load config from `~/.lyriclingo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LingoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LingoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LingoConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LingoConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LingoConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LingoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# LyricLingo Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# loading_delay_ms = 3000            # Or set LYRICLINGO_LOADING_DELAY_MS
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"

# [api]
# base_url = "http://localhost:3001/api"   # Or set LYRICLINGO_API_URL
# timeout_secs = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LingoConfig, cli: &CliOverrides) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("LYRICLINGO_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    // Loading delay: CLI → env → config → default
    let loading_delay_ms = cli
        .loading_delay_ms
        .or_else(|| {
            std::env::var("LYRICLINGO_LOADING_DELAY_MS")
                .ok()
                .and_then(|v| match v.parse() {
                    Ok(ms) => Some(ms),
                    Err(e) => {
                        warn!("Ignoring LYRICLINGO_LOADING_DELAY_MS={:?}: {}", v, e);
                        None
                    }
                })
        })
        .or(config.general.loading_delay_ms)
        .unwrap_or(LOADING_DELAY_MS);

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        api_url,
        timeout_secs: config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        loading_delay_ms,
        log_level,
    }
}
