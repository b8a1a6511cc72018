//! Persisted scaler artifact shared by the fitting tool and the dashboard.
//!
//! The fitting tool replaces the file atomically; the dashboard reads it once
//! at startup and never writes it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::atomic_file;
use crate::features::validate_names;
use crate::ml::StandardScaler;

/// Errors returned while writing the artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Failed to serialize the scaler.
    #[error("Failed to serialize scaler for {path}: {source}")]
    Serialize {
        /// Artifact path.
        path: PathBuf,
        /// JSON error.
        source: serde_json::Error,
    },
    /// Failed to write the artifact file.
    #[error("Failed to write scaler artifact {path}: {source}")]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Errors returned while loading the artifact; fatal to a dashboard session.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file exists at the configured path.
    #[error("Scaler artifact not found at {path}")]
    Missing {
        /// Artifact path.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("Failed to read scaler artifact {path}: {source}")]
    Read {
        /// Artifact path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The file is not a valid scaler encoding.
    #[error("Scaler artifact {path} is corrupt: {source}")]
    Corrupt {
        /// Artifact path.
        path: PathBuf,
        /// JSON error.
        source: serde_json::Error,
    },
    /// The scaler decoded but does not fit the feature contract.
    #[error("Scaler artifact {path} is incompatible: {reason}")]
    Schema {
        /// Artifact path.
        path: PathBuf,
        /// What did not match.
        reason: String,
    },
}

/// Write `scaler` to `path`, replacing any previous artifact.
pub fn save(path: &Path, scaler: &StandardScaler) -> Result<(), ArtifactError> {
    let bytes = serde_json::to_vec_pretty(scaler).map_err(|source| ArtifactError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_file::write(path, &bytes).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "Wrote scaler artifact {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Load and validate the scaler stored at `path`.
pub fn load(path: &Path) -> Result<StandardScaler, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let scaler: StandardScaler =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    let schema_err = |reason| LoadError::Schema {
        path: path.to_path_buf(),
        reason,
    };
    scaler.validate().map_err(schema_err)?;
    validate_names(&scaler.feature_names).map_err(schema_err)?;
    Ok(scaler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FEATURE_COUNT, feature_names};
    use tempfile::tempdir;

    fn contract_scaler() -> StandardScaler {
        StandardScaler {
            feature_names: feature_names(),
            mean: (0..FEATURE_COUNT).map(|idx| idx as f64 * 1.5).collect(),
            scale: (0..FEATURE_COUNT).map(|idx| 0.25 + idx as f64).collect(),
            n_samples_seen: 500,
        }
    }

    #[test]
    fn save_then_load_reproduces_scaler() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        let scaler = contract_scaler();
        save(&path, &scaler).unwrap();
        assert_eq!(load(&path).unwrap(), scaler);
    }

    #[test]
    fn save_overwrites_previous_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(&path, "stale").unwrap();
        let scaler = contract_scaler();
        save(&path, &scaler).unwrap();
        assert_eq!(load(&path).unwrap(), scaler);
    }

    #[test]
    fn absent_file_is_missing() {
        let dir = tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Missing { .. }), "{err}");
    }

    #[test]
    fn garbage_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(&path, b"\x80\x04pickle").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Corrupt { .. }), "{err}");
    }

    #[test]
    fn wrong_feature_count_is_a_schema_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        let mut scaler = contract_scaler();
        scaler.feature_names.truncate(11);
        scaler.mean.truncate(11);
        scaler.scale.truncate(11);
        save(&path, &scaler).unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }), "{err}");
        assert!(err.to_string().contains("expected 12 features"), "{err}");
    }

    #[test]
    fn renamed_feature_is_a_schema_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        let mut scaler = contract_scaler();
        scaler.feature_names[10] = "proteins".into();
        save(&path, &scaler).unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("proteins"), "{err}");
    }
}
