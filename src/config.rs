//! TOML configuration shared by the dashboard and the fitting tool.
//!
//! Lives at `<app root>/config.toml` unless a path is passed explicitly.
//! A missing file yields the default paths and prediction constants.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::atomic_file;
use crate::ml::predictor::{
    BucketThresholds, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, DEFAULT_SCALE_FACTOR,
    MeanProxyPredictor,
};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// Parsed values are out of range.
    #[error("Invalid config at {path}: {reason}")]
    Invalid {
        /// TOML file path.
        path: PathBuf,
        /// Which value was rejected.
        reason: String,
    },
}

/// File locations used by both steps. Relative paths resolve against the
/// working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Training dataset read by the fitting tool.
    pub dataset: PathBuf,
    /// Scaler artifact written by fitting and read by the dashboard.
    pub artifact: PathBuf,
    /// Diagnostic copy of the standardized dataset.
    pub scaled_output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("augmented_500.csv"),
            artifact: PathBuf::from("scaler.json"),
            scaled_output: PathBuf::from("scaled_data.csv"),
        }
    }
}

/// Placeholder prediction constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    pub scale_factor: f64,
    pub low_threshold: f64,
    pub high_threshold: f64,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl PredictionSettings {
    pub fn predictor(&self) -> MeanProxyPredictor {
        MeanProxyPredictor {
            scale_factor: self.scale_factor,
        }
    }

    pub fn thresholds(&self) -> BucketThresholds {
        BucketThresholds {
            low: self.low_threshold,
            high: self.high_threshold,
        }
    }

    fn validate(&self) -> Result<(), String> {
        let values = [
            ("scale_factor", self.scale_factor),
            ("low_threshold", self.low_threshold),
            ("high_threshold", self.high_threshold),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(format!("prediction.{name} must be a finite number"));
        }
        if self.low_threshold > self.high_threshold {
            return Err(format!(
                "prediction.low_threshold ({}) must not exceed prediction.high_threshold ({})",
                self.low_threshold, self.high_threshold
            ));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathSettings,
    pub prediction: PredictionSettings,
}

/// Resolve the default configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load the default configuration file, returning defaults if it is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from(&config_path()?)
}

/// Load `path` if given, else the default location.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_from(path),
        None => load_or_default(),
    }
}

/// Load configuration from a specific file, returning defaults if it is missing.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    config
        .prediction
        .validate()
        .map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
    Ok(config)
}

/// Write the configuration as TOML, replacing the file atomically.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_file::write(path, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}
