//! Flower drying-time demo: fit a feature scaler offline, then score inputs
//! interactively against it.

/// Application directory resolution.
pub mod app_dirs;
/// Scaler artifact persistence.
pub mod artifact;
/// Truncate-and-replace file writes.
pub mod atomic_file;
/// TOML configuration.
pub mod config;
/// CSV feature tables.
pub mod dataset;
/// Prediction dashboard UI.
pub mod egui_app;
/// The 12-column feature contract.
pub mod features;
/// Offline fitting pipeline.
pub mod fitting;
/// Tracing subscriber setup.
pub mod logging;
/// Scaling and prediction.
pub mod ml;
