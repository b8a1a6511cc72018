//! UI state for the dashboard, owned by the controller and read by the renderer.

use std::path::Path;

use egui::Color32;

use crate::egui_app::ui::style;
use crate::features::{FEATURE_NAMES, display_label};
use crate::ml::{DryingBucket, Prediction};

/// Initial text of every input field.
pub const DEFAULT_INPUT_TEXT: &str = "0.0";

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub inputs: Vec<FeatureInput>,
    pub phase: SubmitPhase,
    pub outcome: SubmitOutcome,
    pub status: StatusBarState,
}

impl DashboardState {
    pub fn new(status: StatusBarState) -> Self {
        Self {
            inputs: FEATURE_NAMES.into_iter().map(FeatureInput::new).collect(),
            phase: SubmitPhase::Idle,
            outcome: SubmitOutcome::None,
            status,
        }
    }
}

/// One free-form numeric entry field.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureInput {
    pub name: &'static str,
    pub label: String,
    pub text: String,
}

impl FeatureInput {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            label: display_label(name),
            text: DEFAULT_INPUT_TEXT.to_string(),
        }
    }
}

/// Submission lifecycle. Computing only lasts for the synchronous call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Computing,
}

/// What the results panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    None,
    Result(PredictionView),
    Error(String),
}

/// Render-ready prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionView {
    pub value: f64,
    pub value_text: String,
    pub bucket: DryingBucket,
    pub label: &'static str,
    pub color: Color32,
    /// Rows x columns of the submitted table (always one row).
    pub input_shape: (usize, usize),
    pub expected_features: usize,
}

impl PredictionView {
    pub fn new(prediction: Prediction, input_width: usize, expected_features: usize) -> Self {
        Self {
            value: prediction.value,
            value_text: format!("{:.2}", prediction.value),
            bucket: prediction.bucket,
            label: prediction.bucket.label(),
            color: style::bucket_color(prediction.bucket.tone()),
            input_shape: (1, input_width),
            expected_features,
        }
    }

    pub fn shape_text(&self) -> String {
        format!("Input shape: ({}, {})", self.input_shape.0, self.input_shape.1)
    }

    pub fn expects_text(&self) -> String {
        format!("Scaler expects: {} features", self.expected_features)
    }
}

/// Footer line describing the loaded artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn loaded(path: &Path, features: usize, samples: usize) -> Self {
        Self {
            text: format!(
                "Scaler {} ({features} features, fitted on {samples} rows)",
                path.display()
            ),
            badge_label: "Ready".into(),
            badge_color: style::status_badge_color(style::StatusTone::Ready),
        }
    }
}
