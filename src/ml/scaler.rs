//! Column-wise standardization fitted on the training table.

use ndarray::{Array2, Axis, aview1};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while fitting a scaler.
#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    /// The table has no rows, so no statistics can be computed.
    #[error("Cannot fit a scaler on an empty dataset")]
    EmptyDataset,
    /// The number of names does not match the table width.
    #[error("Dataset has {columns} columns but {names} feature names were given")]
    NameCountMismatch { names: usize, columns: usize },
    /// A column has zero (or non-finite) spread, so standardizing would divide by zero.
    #[error("Column {column} has zero variance (std = {std}); cannot standardize")]
    ZeroVariance { column: String, std: f64 },
}

/// Errors raised while applying a fitted scaler.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// Row or table width differs from the fitted feature count.
    #[error("X has {found} features, but the scaler is expecting {expected} features as input")]
    WidthMismatch { expected: usize, found: usize },
    /// An input value is NaN or infinite.
    #[error("Input value for {column} is not a finite number")]
    NonFinite { column: String },
}

/// Fitted per-column mean/std transform: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    /// Population standard deviation (ddof = 0) per column.
    pub scale: Vec<f64>,
    pub n_samples_seen: usize,
}

impl StandardScaler {
    /// Fit on `data`, whose columns are named by `feature_names` in order.
    pub fn fit(feature_names: Vec<String>, data: &Array2<f64>) -> Result<Self, FitError> {
        if data.nrows() == 0 {
            return Err(FitError::EmptyDataset);
        }
        if feature_names.len() != data.ncols() {
            return Err(FitError::NameCountMismatch {
                names: feature_names.len(),
                columns: data.ncols(),
            });
        }
        let mean = data.mean_axis(Axis(0)).ok_or(FitError::EmptyDataset)?;
        let std = data.std_axis(Axis(0), 0.0);
        for (name, &value) in feature_names.iter().zip(std.iter()) {
            if !value.is_finite() || value <= f64::EPSILON {
                return Err(FitError::ZeroVariance {
                    column: name.clone(),
                    std: value,
                });
            }
        }
        Ok(Self {
            feature_names,
            mean: mean.to_vec(),
            scale: std.to_vec(),
            n_samples_seen: data.nrows(),
        })
    }

    /// Number of columns the scaler expects.
    pub fn n_features_in(&self) -> usize {
        self.mean.len()
    }

    /// Check internal consistency, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.n_features_in();
        if width == 0 {
            return Err("scaler has no features".to_string());
        }
        if self.scale.len() != width {
            return Err(format!(
                "scale length {} does not match mean length {width}",
                self.scale.len()
            ));
        }
        if self.feature_names.len() != width {
            return Err(format!(
                "feature_names length {} does not match mean length {width}",
                self.feature_names.len()
            ));
        }
        if self.mean.iter().any(|value| !value.is_finite()) {
            return Err("mean contains non-finite values".to_string());
        }
        if self
            .scale
            .iter()
            .any(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err("scale must be finite and > 0".to_string());
        }
        Ok(())
    }

    /// Standardize a single row.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, TransformError> {
        self.check_width(row.len())?;
        row.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .enumerate()
            .map(|(idx, (&value, (&mean, &scale)))| {
                if value.is_finite() {
                    Ok((value - mean) / scale)
                } else {
                    Err(self.non_finite(idx))
                }
            })
            .collect()
    }

    /// Standardize every row of a table.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, TransformError> {
        self.check_width(data.ncols())?;
        if let Some((idx, _)) = data.indexed_iter().find(|(_, value)| !value.is_finite()) {
            return Err(self.non_finite(idx.1));
        }
        let mean = aview1(&self.mean);
        let scale = aview1(&self.scale);
        let mut scaled = data.to_owned();
        for mut row in scaled.rows_mut() {
            row -= &mean;
            row /= &scale;
        }
        Ok(scaled)
    }

    fn check_width(&self, found: usize) -> Result<(), TransformError> {
        let expected = self.n_features_in();
        if found != expected {
            return Err(TransformError::WidthMismatch { expected, found });
        }
        Ok(())
    }

    fn non_finite(&self, idx: usize) -> TransformError {
        TransformError::NonFinite {
            column: self
                .feature_names
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("column {idx}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|idx| format!("f{idx}")).collect()
    }

    #[test]
    fn fit_uses_population_std() {
        let data = arr2(&[[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        assert_eq!(scaler.mean, vec![2.0, 20.0]);
        let expected = (2.0f64 / 3.0).sqrt();
        assert!((scaler.scale[0] - expected).abs() < 1e-12);
        assert!((scaler.scale[1] - expected * 10.0).abs() < 1e-12);
        assert_eq!(scaler.n_samples_seen, 3);
        scaler.validate().unwrap();
    }

    #[test]
    fn transformed_columns_have_zero_mean_unit_variance() {
        let data = arr2(&[[1.0, -4.0], [5.0, 0.5], [9.0, 2.0], [2.0, 8.0]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        let scaled = scaler.transform(&data).unwrap();
        for column in scaled.columns() {
            assert!(column.mean().unwrap().abs() < 1e-12);
            assert!((column.std(0.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn row_and_table_transforms_agree() {
        let data = arr2(&[[1.0, 3.0], [4.0, 7.0], [6.0, 2.0]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        let table = scaler.transform(&data).unwrap();
        for (idx, row) in data.rows().into_iter().enumerate() {
            let single = scaler.transform_row(&row.to_vec()).unwrap();
            assert_eq!(single, table.row(idx).to_vec());
        }
    }

    #[test]
    fn transform_is_deterministic() {
        let data = arr2(&[[0.3, 1.7], [2.9, -0.4], [1.1, 5.5]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        let row = [1.234, -9.87];
        let first = scaler.transform_row(&row).unwrap();
        for _ in 0..5 {
            assert_eq!(scaler.transform_row(&row).unwrap(), first);
        }
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let data = Array2::<f64>::zeros((0, 2));
        assert_eq!(
            StandardScaler::fit(names(2), &data),
            Err(FitError::EmptyDataset)
        );
    }

    #[test]
    fn constant_column_is_rejected() {
        let data = arr2(&[[5.0, 1.0], [5.0, 2.0]]);
        let err = StandardScaler::fit(names(2), &data).unwrap_err();
        assert!(matches!(err, FitError::ZeroVariance { ref column, .. } if column == "f0"));
    }

    #[test]
    fn name_count_must_match_width() {
        let data = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let err = StandardScaler::fit(names(3), &data).unwrap_err();
        assert_eq!(err, FitError::NameCountMismatch { names: 3, columns: 2 });
    }

    #[test]
    fn width_mismatch_is_reported() {
        let data = arr2(&[[1.0, 2.0], [3.0, 5.0]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        let err = scaler.transform_row(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, TransformError::WidthMismatch { expected: 2, found: 3 });
        assert_eq!(
            err.to_string(),
            "X has 3 features, but the scaler is expecting 2 features as input"
        );
    }

    #[test]
    fn non_finite_input_names_the_column() {
        let data = arr2(&[[1.0, 2.0], [3.0, 5.0]]);
        let scaler = StandardScaler::fit(names(2), &data).unwrap();
        let err = scaler.transform_row(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, TransformError::NonFinite { column: "f1".into() });
    }

    #[test]
    fn validate_catches_inconsistent_lengths() {
        let scaler = StandardScaler {
            feature_names: names(2),
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
            n_samples_seen: 4,
        };
        assert!(scaler.validate().is_err());
    }
}
