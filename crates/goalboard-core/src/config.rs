// Configuration loading and parsing (dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Name of the single configuration file under `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("no config yet and no shipped default at {path}; run from the project root")]
    NoDefaults { path: PathBuf },

    #[error("failed to install default config at {path}: {source}")]
    DefaultsCopyError {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub important_matches: ImportantMatchConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the goal records CSV, relative to the working directory.
    pub path: String,
    /// chrono format strings tried in order when parsing the Date column.
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

/// Substrings that mark a goal as scored in an important match.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportantMatchConfig {
    pub competition: String,
    pub opponent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Initial value of the top-N sliders.
    pub default_top_n: usize,
    /// Upper bound of the top-N sliders.
    pub max_top_n: usize,
    /// Color names offered by the color selector, first one is the default.
    pub palette: Vec<String>,
}

fn default_date_formats() -> Vec<String> {
    vec!["%Y-%m-%d".into(), "%m/%d/%y".into(), "%m/%d/%Y".into()]
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/dashboard.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
        path: path.clone(),
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Install `defaults/dashboard.toml` as `config/dashboard.toml` when the
/// user has no config yet. Returns the installed path, or `None` when a
/// config was already present. An existing config is never overwritten.
pub fn install_default_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let default = base_dir.join("defaults").join(CONFIG_FILE);
    if !default.is_file() {
        return Err(ConfigError::NoDefaults { path: default });
    }

    let copy_err = |source| ConfigError::DefaultsCopyError {
        path: target.clone(),
        source,
    };
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(copy_err)?;
    }
    std::fs::copy(&default, &target).map_err(copy_err)?;
    info!("Installed default config at {}", target.display());

    Ok(Some(target))
}

/// Load config relative to the current working directory, installing the
/// shipped default on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    install_default_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.path".into(),
            message: "must not be empty".into(),
        });
    }

    if config.data.date_formats.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.date_formats".into(),
            message: "must list at least one format".into(),
        });
    }

    // An empty substring would match every record.
    let important = &config.important_matches;
    let substrings: &[(&str, &str)] = &[
        ("important_matches.competition", important.competition.as_str()),
        ("important_matches.opponent", important.opponent.as_str()),
    ];
    for (name, val) in substrings {
        if val.is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let display = &config.display;
    if display.default_top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "display.default_top_n".into(),
            message: "must be > 0".into(),
        });
    }
    if display.max_top_n < display.default_top_n {
        return Err(ConfigError::ValidationError {
            field: "display.max_top_n".into(),
            message: format!(
                "must be >= display.default_top_n ({}), got {}",
                display.default_top_n, display.max_top_n
            ),
        });
    }
    if display.palette.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "display.palette".into(),
            message: "must list at least one color".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
