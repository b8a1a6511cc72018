#![allow(dead_code)]

use std::path::Path;

use floradry::features::FEATURE_NAMES;

/// Deterministic, strictly positive feature value with per-column spread.
pub fn feature_value(row: usize, column: usize) -> f64 {
    (column as f64 + 1.0) * 10.0 + ((row * 7 + column * 3) % 11) as f64 * 0.5 + row as f64 * 0.1
}

/// Write a training CSV with `rows` rows, surrounding the contract columns
/// with unrelated ones, optionally dropping a feature column.
pub fn write_training_csv(path: &Path, rows: usize, drop_column: Option<&str>) {
    let kept: Vec<(usize, &str)> = FEATURE_NAMES
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, name)| Some(*name) != drop_column)
        .collect();

    let mut header = vec!["id".to_string(), "species".to_string()];
    header.extend(kept.iter().map(|(_, name)| name.to_string()));
    header.push("drying_days".to_string());

    let mut text = header.join(",");
    text.push('\n');
    for row in 0..rows {
        let mut cells = vec![row.to_string(), format!("species_{}", row % 4)];
        cells.extend(kept.iter().map(|(column, _)| feature_value(row, *column).to_string()));
        cells.push(format!("{}", 3 + row % 5));
        text.push_str(&cells.join(","));
        text.push('\n');
    }
    std::fs::write(path, text).unwrap();
}

/// Raw (unscaled) contract-ordered row as written by `write_training_csv`.
pub fn raw_row(row: usize) -> Vec<f64> {
    (0..FEATURE_NAMES.len())
        .map(|column| feature_value(row, column))
        .collect()
}
