//! Bridges the loaded scaler and predictor to the egui UI state.

use std::path::PathBuf;

use crate::artifact::{self, LoadError};
use crate::config::AppConfig;
use crate::egui_app::state::{
    DashboardState, PredictionView, StatusBarState, SubmitOutcome, SubmitPhase,
};
use crate::ml::{BucketThresholds, Predictor, StandardScaler, predict_and_classify};

/// Holds the read-only scaler for the session and the mutable UI state.
pub struct DashboardController {
    pub ui: DashboardState,
    scaler: StandardScaler,
    predictor: Box<dyn Predictor>,
    thresholds: BucketThresholds,
    artifact_path: PathBuf,
}

impl DashboardController {
    /// Load the scaler artifact named by `config`. Called once per process;
    /// a failure ends the session.
    pub fn initialize(config: &AppConfig) -> Result<Self, LoadError> {
        let path = config.paths.artifact.clone();
        let scaler = artifact::load(&path)?;
        tracing::info!(
            "Loaded scaler from {} ({} features, {} samples)",
            path.display(),
            scaler.n_features_in(),
            scaler.n_samples_seen
        );
        Ok(Self::new(
            scaler,
            Box::new(config.prediction.predictor()),
            config.prediction.thresholds(),
            path,
        ))
    }

    /// Assemble a controller from already-loaded parts.
    pub fn new(
        scaler: StandardScaler,
        predictor: Box<dyn Predictor>,
        thresholds: BucketThresholds,
        artifact_path: PathBuf,
    ) -> Self {
        let status = StatusBarState::loaded(
            &artifact_path,
            scaler.n_features_in(),
            scaler.n_samples_seen,
        );
        Self {
            ui: DashboardState::new(status),
            scaler,
            predictor,
            thresholds,
            artifact_path,
        }
    }

    pub fn artifact_path(&self) -> &PathBuf {
        &self.artifact_path
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Scale the current inputs, predict and classify. Inputs are left as
    /// typed whatever the outcome.
    pub fn submit(&mut self) -> &SubmitOutcome {
        self.ui.phase = SubmitPhase::Computing;
        self.ui.outcome = match self.compute() {
            Ok(view) => {
                tracing::info!("Predicted {} ({:?})", view.value_text, view.bucket);
                SubmitOutcome::Result(view)
            }
            Err(message) => {
                tracing::warn!("Prediction failed: {message}");
                SubmitOutcome::Error(message)
            }
        };
        self.ui.phase = SubmitPhase::Idle;
        &self.ui.outcome
    }

    fn compute(&self) -> Result<PredictionView, String> {
        let row = self.parse_inputs()?;
        tracing::debug!(
            "Input shape: (1, {}); scaler expects {} features",
            row.len(),
            self.scaler.n_features_in()
        );
        let scaled = self
            .scaler
            .transform_row(&row)
            .map_err(|err| err.to_string())?;
        let prediction = predict_and_classify(self.predictor.as_ref(), &self.thresholds, &scaled)
            .map_err(|err| err.to_string())?;
        Ok(PredictionView::new(
            prediction,
            row.len(),
            self.scaler.n_features_in(),
        ))
    }

    fn parse_inputs(&self) -> Result<Vec<f64>, String> {
        self.ui
            .inputs
            .iter()
            .map(|input| {
                let text = input.text.trim();
                text.parse::<f64>()
                    .map_err(|_| format!("{} must be a number (got {text:?})", input.label))
            })
            .collect()
    }
}
