//! Drying-time prediction on standardized feature vectors.
//!
//! No trained model exists yet; [`MeanProxyPredictor`] stands in for one.
//! Callers hold a `dyn Predictor` so a real model can replace it without
//! touching scaling or the UI.

use thiserror::Error;

/// Default multiplier applied to the mean of the standardized vector.
pub const DEFAULT_SCALE_FACTOR: f64 = 10.0;
/// Default lower bound of the moderate bucket (inclusive).
pub const DEFAULT_LOW_THRESHOLD: f64 = 0.0;
/// Default upper bound of the moderate bucket (inclusive).
pub const DEFAULT_HIGH_THRESHOLD: f64 = 5.0;

/// Errors raised while predicting.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    /// The standardized vector has no values.
    #[error("Cannot predict from an empty feature vector")]
    EmptyInput,
    /// The prediction came out NaN or infinite.
    #[error("Prediction is not a finite number")]
    NonFinite,
}

/// Maps a standardized feature vector to a drying-time estimate.
pub trait Predictor {
    /// Estimate drying time (proxy units) for one standardized row.
    fn predict(&self, standardized: &[f64]) -> Result<f64, PredictError>;
}

/// Placeholder model: mean of the standardized values times a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanProxyPredictor {
    pub scale_factor: f64,
}

impl Default for MeanProxyPredictor {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl Predictor for MeanProxyPredictor {
    fn predict(&self, standardized: &[f64]) -> Result<f64, PredictError> {
        if standardized.is_empty() {
            return Err(PredictError::EmptyInput);
        }
        let mean = standardized.iter().sum::<f64>() / standardized.len() as f64;
        let value = mean * self.scale_factor;
        if !value.is_finite() {
            return Err(PredictError::NonFinite);
        }
        Ok(value)
    }
}

/// Display tone associated with a bucket; the UI maps it to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketTone {
    Orange,
    Green,
    Blue,
}

/// Categorical condition derived from the drying-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryingBucket {
    /// Below the low threshold.
    Dry,
    /// Between the thresholds, both inclusive.
    Moderate,
    /// Above the high threshold.
    Humid,
}

impl DryingBucket {
    pub fn label(self) -> &'static str {
        match self {
            DryingBucket::Dry => "Dry Environment (Quick Drying)",
            DryingBucket::Moderate => "Moderate (Balanced Moisture)",
            DryingBucket::Humid => "Humid Environment (Slow Drying)",
        }
    }

    pub fn tone(self) -> BucketTone {
        match self {
            DryingBucket::Dry => BucketTone::Orange,
            DryingBucket::Moderate => BucketTone::Green,
            DryingBucket::Humid => BucketTone::Blue,
        }
    }
}

/// Thresholds splitting the estimate into three buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl BucketThresholds {
    /// `value < low` is dry, `low..=high` moderate, anything above humid.
    pub fn classify(&self, value: f64) -> DryingBucket {
        if value < self.low {
            DryingBucket::Dry
        } else if value <= self.high {
            DryingBucket::Moderate
        } else {
            DryingBucket::Humid
        }
    }
}

/// A prediction together with its bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: f64,
    pub bucket: DryingBucket,
}

/// Run `predictor` on a standardized row and classify the result.
pub fn predict_and_classify(
    predictor: &dyn Predictor,
    thresholds: &BucketThresholds,
    standardized: &[f64],
) -> Result<Prediction, PredictError> {
    let value = predictor.predict(standardized)?;
    Ok(Prediction {
        value,
        bucket: thresholds.classify(value),
    })
}
