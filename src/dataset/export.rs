//! Write a standardized table back to CSV for inspection.

use std::path::Path;

use ndarray::Array2;

use super::DatasetError;
use crate::atomic_file;

/// Write `values` under a `names` header row, replacing any existing file.
pub fn write_scaled(path: &Path, names: &[String], values: &Array2<f64>) -> Result<(), DatasetError> {
    let encode_err = |source| DatasetError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(names).map_err(encode_err)?;
    for row in values.rows() {
        writer
            .write_record(row.iter().map(|value| value.to_string()))
            .map_err(encode_err)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| DatasetError::Write {
            path: path.to_path_buf(),
            source: err.into_error(),
        })?;
    atomic_file::write(path, &bytes).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}
