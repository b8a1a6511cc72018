//! Scaling and prediction building blocks.
//!
//! The scaler is fitted offline by `floradry-fit`; the dashboard loads it and
//! feeds standardized rows to a [`predictor::Predictor`].

pub mod predictor;
pub mod scaler;

pub use predictor::{
    BucketThresholds, BucketTone, DryingBucket, MeanProxyPredictor, PredictError, Prediction,
    Predictor, predict_and_classify,
};
pub use scaler::{FitError, StandardScaler, TransformError};
