// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Three failure kinds, with very different blast radii:
//
//   ArtifactLoad — missing or corrupt model/scaler file.
//                  Fatal at startup: the process must not take
//                  submissions without a valid classifier.
//
//   OutOfRange   — a field value outside its declared bounds.
//                  Recoverable: the user is re-prompted, the
//                  session survives.
//
//   Inference    — the vector and model disagree on arity (or a
//                  malformed tree is reached). Recoverable per
//                  submission: logged, generic failure shown,
//                  session stays usable.
//
// No retries anywhere. Inference is deterministic, so retrying
// cannot change the outcome, and artifacts are static files.
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

use crate::domain::field_spec::Field;

#[derive(Debug, Error)]
pub enum ScreenError {
    /// The model or scaler artifact could not be loaded.
    #[error("failed to load artifact '{path}': {reason}")]
    ArtifactLoad { path: String, reason: String },

    /// A submitted value lies outside its field's declared bounds.
    #[error("{field} value {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f64,
        min:   f64,
        max:   f64,
    },

    /// The classifier could not score the vector it was given.
    #[error("inference failed: {reason}")]
    Inference { reason: String },

    /// A field name that is not one of the eight measurements.
    #[error("unknown field '{name}'")]
    UnknownField { name: String },
}

impl ScreenError {
    /// True for errors the session can recover from by asking
    /// the user again; false for startup-fatal ones.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ScreenError::ArtifactLoad { .. })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_load_is_fatal_others_are_not() {
        let fatal = ScreenError::ArtifactLoad {
            path:   "models/model.json".into(),
            reason: "no such file".into(),
        };
        assert!(!fatal.is_recoverable());

        let range = ScreenError::OutOfRange {
            field: Field::Glucose,
            value: 49.0,
            min:   50.0,
            max:   200.0,
        };
        assert!(range.is_recoverable());
    }

    #[test]
    fn test_out_of_range_names_field_and_bounds() {
        let err = ScreenError::OutOfRange {
            field: Field::Glucose,
            value: 49.0,
            min:   50.0,
            max:   200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Glucose"));
        assert!(msg.contains("49"));
        assert!(msg.contains("[50, 200]"));
    }
}
