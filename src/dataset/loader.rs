//! Load the contract feature columns from a headered CSV.

use std::path::Path;

use ndarray::Array2;

use super::DatasetError;
use crate::features::FEATURE_NAMES;

/// Numeric table holding the contract columns, in contract order.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub feature_names: Vec<String>,
    pub values: Array2<f64>,
    /// Column count of the source file, before selection.
    pub source_columns: usize,
}

impl FeatureTable {
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }
}

/// Read `path` and select the 12 feature columns by name.
///
/// Extra columns are ignored. Every missing column is reported at once, before
/// any row is parsed.
pub fn load_features(path: &Path) -> Result<FeatureTable, DatasetError> {
    let read_err = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(read_err)?;
    let headers = reader.headers().map_err(read_err)?.clone();

    let mut indices = Vec::with_capacity(FEATURE_NAMES.len());
    let mut missing = Vec::new();
    for name in FEATURE_NAMES {
        match headers.iter().position(|header| header == name) {
            Some(idx) => indices.push(idx),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut flat = Vec::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        rows += 1;
        for (&idx, name) in indices.iter().zip(FEATURE_NAMES) {
            let raw = record.get(idx).unwrap_or("");
            let value = raw.parse::<f64>().map_err(|_| DatasetError::InvalidValue {
                path: path.to_path_buf(),
                row: rows,
                column: name.to_string(),
                value: raw.to_string(),
            })?;
            flat.push(value);
        }
    }

    let values = Array2::from_shape_vec((rows, FEATURE_NAMES.len()), flat).map_err(|source| {
        DatasetError::Shape {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(FeatureTable {
        feature_names: crate::features::feature_names(),
        values,
        source_columns: headers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn header_with_extra() -> String {
        let mut columns = vec!["species".to_string()];
        columns.extend(FEATURE_NAMES.iter().rev().map(|name| name.to_string()));
        columns.join(",")
    }

    #[test]
    fn selects_columns_in_contract_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        // Columns are reversed in the file; value == 100 + contract index.
        let row: Vec<String> = std::iter::once("rose".to_string())
            .chain((0..12).rev().map(|idx| format!("{}", 100 + idx)))
            .collect();
        std::fs::write(&path, format!("{}\n{}\n", header_with_extra(), row.join(","))).unwrap();

        let table = load_features(&path).unwrap();
        assert_eq!(table.rows(), 1);
        assert_eq!(table.source_columns, 13);
        let expected: Vec<f64> = (0..12).map(|idx| 100.0 + idx as f64).collect();
        assert_eq!(table.values.row(0).to_vec(), expected);
    }

    #[test]
    fn reports_every_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let header: Vec<&str> = FEATURE_NAMES
            .iter()
            .copied()
            .filter(|name| *name != "protein" && *name != "nectar_ml")
            .collect();
        std::fs::write(&path, format!("{}\n", header.join(","))).unwrap();

        match load_features(&path) {
            Err(DatasetError::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["nectar_ml".to_string(), "protein".to_string()]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_names_row_and_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut cells = vec!["1"; 12];
        cells[3] = "lots";
        std::fs::write(
            &path,
            format!("{}\n{}\n", FEATURE_NAMES.join(","), cells.join(",")),
        )
        .unwrap();

        match load_features(&path) {
            Err(DatasetError::InvalidValue { row, column, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "flowers_m2");
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = load_features(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
