// ============================================================
// Layer 2 — Screen Use Case
// ============================================================
// The inference request pipeline, end to end:
//
//   raw field→value map
//     → Validator    (defaults, bounds, coercion)
//     → Transformer  (fitted scaler, or identity)
//     → Classifier   (frozen tree ensemble)
//     → Presenter    (one of two fixed verdicts)
//
// The artifacts are loaded once when the use case is built and
// are read-only afterwards, so one use case can serve any
// number of submissions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::{transformer, validator};
use crate::domain::decision::{present, DecisionMessage};
use crate::domain::error::ScreenError;
use crate::domain::field_spec::{Field, FIELD_SPECS};
use crate::domain::traits::{Classifier, FeatureScaler};
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::ensemble::TreeEnsemble;
use crate::ml::scaler::StandardScaler;

pub struct ScreenUseCase {
    model:  TreeEnsemble,
    scaler: Option<StandardScaler>,
}

impl ScreenUseCase {
    /// Load the frozen artifacts and build the pipeline. Fails
    /// fast: a process without a valid classifier never serves.
    pub fn load(model_path: &Path, scaler_path: Option<PathBuf>) -> Result<Self> {
        let store = ArtifactStore::new(model_path, scaler_path);
        let (model, scaler) = store.load().context("could not initialise the screening pipeline")?;
        Ok(Self { model, scaler })
    }

    /// Build from already-deserialized artifacts.
    pub fn from_parts(model: TreeEnsemble, scaler: Option<StandardScaler>) -> Self {
        Self { model, scaler }
    }

    /// Whether this deployment scales features before inference.
    pub fn scales_features(&self) -> bool {
        self.scaler.is_some()
    }

    /// Run one submission through the full pipeline.
    ///
    /// Recoverable errors (out-of-range input, arity mismatch)
    /// come back as `ScreenError` so the caller can re-prompt;
    /// they never poison the loaded artifacts.
    pub fn screen(&self, raw: &HashMap<Field, f64>) -> Result<DecisionMessage, ScreenError> {
        let validated = validator::validate(raw, &FIELD_SPECS)?;
        let scaler = self.scaler.as_ref().map(|s| s as &dyn FeatureScaler);
        let features = transformer::transform(&validated, scaler)?;
        let label = self.model.predict(&features)?;
        tracing::info!("Screening verdict: class {}", label.as_u8());
        Ok(present(label))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::Severity;
    use crate::ml::ensemble::{DecisionTree, TreeNode};

    /// One stump on raw glucose: values above 130 are positive.
    fn raw_units_model() -> TreeEnsemble {
        TreeEnsemble {
            n_features: 8,
            trees: vec![DecisionTree {
                nodes: vec![
                    TreeNode::Split { feature: 1, threshold: 130.0, left: 1, right: 2 },
                    TreeNode::Leaf { value: 0.0 },
                    TreeNode::Leaf { value: 1.0 },
                ],
            }],
            threshold: 0.5,
        }
    }

    fn reference_inputs() -> HashMap<Field, f64> {
        [
            (Field::Pregnancies, 2.0),
            (Field::Glucose, 120.0),
            (Field::BloodPressure, 70.0),
            (Field::SkinThickness, 20.0),
            (Field::Insulin, 79.0),
            (Field::Bmi, 25.0),
            (Field::DiabetesPedigreeFunction, 0.5),
            (Field::Age, 33.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_unscaled_pipeline_feeds_raw_values_to_the_model() {
        // Glucose 120 in raw units falls below the raw-unit
        // split, so the unscaled deployment must report success.
        let uc = ScreenUseCase::from_parts(raw_units_model(), None);
        let msg = uc.screen(&reference_inputs()).unwrap();
        assert_eq!(msg.severity, Severity::Success);

        let mut high = reference_inputs();
        high.insert(Field::Glucose, 160.0);
        assert_eq!(uc.screen(&high).unwrap().severity, Severity::Warning);
    }

    #[test]
    fn test_scaled_pipeline_never_feeds_raw_values_to_the_model() {
        // With a scaler configured, glucose 160 becomes a small
        // z-score (~1.2) that lands on the LEFT of the raw-unit
        // split. If the raw 160 ever reached the model this test
        // would see a warning instead.
        let scaler = StandardScaler {
            mean:  vec![3.8, 120.9, 69.1, 20.5, 79.8, 32.0, 0.47, 33.2],
            scale: vec![3.4, 32.0, 19.4, 16.0, 115.2, 7.9, 0.33, 11.8],
        };
        let uc = ScreenUseCase::from_parts(raw_units_model(), Some(scaler));
        assert!(uc.scales_features());

        let mut high = reference_inputs();
        high.insert(Field::Glucose, 160.0);
        assert_eq!(uc.screen(&high).unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_out_of_range_input_is_recoverable() {
        let uc = ScreenUseCase::from_parts(raw_units_model(), None);
        let mut bad = reference_inputs();
        bad.insert(Field::Glucose, 49.0);
        let err = uc.screen(&bad).unwrap_err();
        assert!(matches!(err, ScreenError::OutOfRange { field: Field::Glucose, .. }));
        assert!(err.is_recoverable());

        // The session survives: the same use case still serves
        // the corrected submission.
        assert!(uc.screen(&reference_inputs()).is_ok());
    }

    #[test]
    fn test_verdict_is_always_one_of_two_messages() {
        let uc = ScreenUseCase::from_parts(raw_units_model(), None);
        let negative = uc.screen(&reference_inputs()).unwrap();
        let mut high = reference_inputs();
        high.insert(Field::Glucose, 160.0);
        let positive = uc.screen(&high).unwrap();

        for glucose in [50.0, 90.0, 130.0, 131.0, 200.0] {
            let mut raw = reference_inputs();
            raw.insert(Field::Glucose, glucose);
            let msg = uc.screen(&raw).unwrap();
            assert!(msg == negative || msg == positive);
        }
    }
}
