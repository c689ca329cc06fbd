// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Owns the two frozen artifact files:
//
//   models/model.json  — the fitted tree-ensemble classifier
//   models/scaler.json — the fitted standard scaler (only in
//                        deployments that scale features)
//
// Loading rules:
//   - The model is always mandatory.
//   - The scaler is mandatory IF a path was configured. A
//     declared scaler that fails to load is the same fatal
//     error as a missing model, never a silent fallback to
//     unscaled inference.
//   - Every artifact is structurally checked right after
//     deserialization; a model with no predict capability is
//     rejected here, before any submission is taken.
//   - Load happens once per process. Fail fast, then read-only.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::ScreenError;
use crate::domain::field_spec::FEATURE_COUNT;
use crate::ml::ensemble::TreeEnsemble;
use crate::ml::scaler::StandardScaler;

/// Paths to the frozen artifacts for one deployment.
pub struct ArtifactStore {
    model_path:  PathBuf,
    scaler_path: Option<PathBuf>,
}

impl ArtifactStore {
    pub fn new(model_path: impl Into<PathBuf>, scaler_path: Option<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            scaler_path,
        }
    }

    /// Read and check both artifacts. Called exactly once, at
    /// startup; any error here means the process must not serve.
    pub fn load(&self) -> Result<(TreeEnsemble, Option<StandardScaler>), ScreenError> {
        let model: TreeEnsemble = read_artifact(&self.model_path)?;
        model
            .check_against(FEATURE_COUNT)
            .map_err(|reason| load_error(&self.model_path, reason))?;
        tracing::info!(
            "Loaded classifier from '{}': {} trees, threshold {}",
            self.model_path.display(),
            model.trees.len(),
            model.threshold,
        );

        let scaler = match &self.scaler_path {
            None => None,
            Some(path) => {
                let scaler: StandardScaler = read_artifact(path)?;
                scaler
                    .check_against(FEATURE_COUNT)
                    .map_err(|reason| load_error(path, reason))?;
                tracing::info!("Loaded feature scaler from '{}'", path.display());
                Some(scaler)
            }
        };

        Ok((model, scaler))
    }
}

/// Read one JSON artifact file into its concrete type.
fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ScreenError> {
    let text = fs::read_to_string(path).map_err(|e| load_error(path, e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| load_error(path, e.to_string()))
}

fn load_error(path: &Path, reason: impl Into<String>) -> ScreenError {
    ScreenError::ArtifactLoad {
        path:   path.display().to_string(),
        reason: reason.into(),
    }
}
