//! Offline fitting step: dataset CSV in, scaler artifact and scaled CSV out.

use std::path::PathBuf;

use thiserror::Error;

use crate::artifact::{self, ArtifactError};
use crate::config::PathSettings;
use crate::dataset::{self, DatasetError};
use crate::ml::{FitError as ScalerFitError, StandardScaler, TransformError};

/// Inputs and outputs of a fitting run.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub dataset: PathBuf,
    pub artifact_out: PathBuf,
    pub scaled_out: PathBuf,
}

impl From<&PathSettings> for FitOptions {
    fn from(paths: &PathSettings) -> Self {
        Self {
            dataset: paths.dataset.clone(),
            artifact_out: paths.artifact.clone(),
            scaled_out: paths.scaled_output.clone(),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct FitReport {
    pub rows: usize,
    pub source_columns: usize,
    pub scaler: StandardScaler,
    pub artifact_path: PathBuf,
    pub scaled_path: PathBuf,
}

/// Errors that abort a fitting run.
#[derive(Debug, Error)]
pub enum FitError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Failed to fit scaler: {0}")]
    Scaler(#[from] ScalerFitError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("Failed to scale dataset: {0}")]
    Transform(#[from] TransformError),
}

/// Load the dataset, fit the scaler, persist it and write the scaled table.
///
/// Nothing is written unless loading and fitting both succeed.
pub fn run_fit(options: &FitOptions) -> Result<FitReport, FitError> {
    let table = dataset::load_features(&options.dataset)?;
    tracing::info!(
        "Dataset loaded: {} ({} rows, {} columns)",
        options.dataset.display(),
        table.rows(),
        table.source_columns
    );
    tracing::info!("Using features: {}", table.feature_names.join(", "));
    tracing::info!(
        "Shape after filtering: ({}, {})",
        table.values.nrows(),
        table.values.ncols()
    );

    let scaler = StandardScaler::fit(table.feature_names.clone(), &table.values)?;
    let scaled = scaler.transform(&table.values)?;

    artifact::save(&options.artifact_out, &scaler)?;
    tracing::info!("Saved scaler as {}", options.artifact_out.display());

    dataset::write_scaled(&options.scaled_out, &scaler.feature_names, &scaled)?;
    tracing::info!("Scaled data saved as {}", options.scaled_out.display());

    Ok(FitReport {
        rows: table.rows(),
        source_columns: table.source_columns,
        scaler,
        artifact_path: options.artifact_out.clone(),
        scaled_path: options.scaled_out.clone(),
    })
}
