mod support;

use floradry::artifact;
use floradry::features::{FEATURE_COUNT, FEATURE_NAMES};
use floradry::fitting::{FitError, FitOptions, run_fit};
use floradry::dataset::DatasetError;
use support::dataset::{raw_row, write_training_csv};
use tempfile::tempdir;

const ROWS: usize = 40;

fn options_in(dir: &std::path::Path) -> FitOptions {
    FitOptions {
        dataset: dir.join("augmented.csv"),
        artifact_out: dir.join("scaler.json"),
        scaled_out: dir.join("scaled_data.csv"),
    }
}

fn read_scaled(path: &std::path::Path) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .unwrap()
                .iter()
                .map(|cell| cell.parse::<f64>().unwrap())
                .collect()
        })
        .collect();
    (header, rows)
}

#[test]
fn loaded_artifact_reproduces_scaled_output() {
    let dir = tempdir().unwrap();
    let options = options_in(dir.path());
    write_training_csv(&options.dataset, ROWS, None);

    let report = run_fit(&options).unwrap();
    assert_eq!(report.rows, ROWS);
    assert_eq!(report.source_columns, FEATURE_COUNT + 3);

    let loaded = artifact::load(&options.artifact_out).unwrap();
    assert_eq!(loaded, report.scaler);
    assert_eq!(loaded.n_features_in(), FEATURE_COUNT);
    assert_eq!(loaded.n_samples_seen, ROWS);

    let (header, scaled_rows) = read_scaled(&options.scaled_out);
    assert_eq!(header, FEATURE_NAMES.to_vec());
    assert_eq!(scaled_rows.len(), ROWS);
    for (idx, scaled) in scaled_rows.iter().enumerate() {
        let recomputed = loaded.transform_row(&raw_row(idx)).unwrap();
        for (a, b) in recomputed.iter().zip(scaled) {
            assert!((a - b).abs() < 1e-12, "row {idx}: {a} vs {b}");
        }
    }
}

#[test]
fn scaled_output_is_standardized() {
    let dir = tempdir().unwrap();
    let options = options_in(dir.path());
    write_training_csv(&options.dataset, ROWS, None);
    run_fit(&options).unwrap();

    let (_, rows) = read_scaled(&options.scaled_out);
    for column in 0..FEATURE_COUNT {
        let values: Vec<f64> = rows.iter().map(|row| row[column]).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 1e-9, "column {column} mean {mean}");
        assert!((var - 1.0).abs() < 1e-9, "column {column} var {var}");
    }
}

#[test]
fn missing_column_fails_before_writing_anything() {
    let dir = tempdir().unwrap();
    let options = options_in(dir.path());
    write_training_csv(&options.dataset, ROWS, Some("corolla_mm"));
    std::fs::write(&options.artifact_out, "previous artifact").unwrap();

    let err = run_fit(&options).unwrap_err();
    match &err {
        FitError::Dataset(DatasetError::MissingColumns { missing, .. }) => {
            assert_eq!(missing, &vec!["corolla_mm".to_string()]);
        }
        other => panic!("expected missing column error, got {other:?}"),
    }
    assert!(err.to_string().contains("corolla_mm"));
    assert_eq!(
        std::fs::read_to_string(&options.artifact_out).unwrap(),
        "previous artifact"
    );
    assert!(!options.scaled_out.exists());
}

#[test]
fn refitting_replaces_the_artifact() {
    let dir = tempdir().unwrap();
    let options = options_in(dir.path());
    write_training_csv(&options.dataset, ROWS, None);
    let first = run_fit(&options).unwrap();

    write_training_csv(&options.dataset, ROWS / 2, None);
    let second = run_fit(&options).unwrap();
    assert_ne!(first.scaler, second.scaler);
    assert_eq!(artifact::load(&options.artifact_out).unwrap(), second.scaler);
}
