// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The model and scaler artifacts are opaque: all this crate is
// promised is a predict capability and a transform capability.
// These traits ARE that promise.
//
// By programming against traits instead of concrete types,
// the pipeline does not care how the artifact was serialized:
//   - TreeEnsemble implements Classifier
//   - StandardScaler implements FeatureScaler
//   - A future ONNX-backed model could implement Classifier
//     without touching the application layer
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::ScreenError;
use crate::domain::feature::{FeatureVector, Label};

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A frozen binary decision function over the eight features.
///
/// Implementations are immutable after load; `predict` must be
/// a pure function of its input.
pub trait Classifier {
    /// Score the vector and return the binary verdict.
    fn predict(&self, features: &FeatureVector) -> Result<Label, ScreenError>;
}

// ─── FeatureScaler ────────────────────────────────────────────────────────────
/// A frozen normalization transform, fitted alongside the model.
///
/// Same arity in and out. Pairing the right scaler with the
/// right model is an operational invariant — a mismatched pair
/// is a configuration error this crate cannot detect at runtime.
pub trait FeatureScaler {
    /// Apply the fitted transform to a raw feature vector.
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ScreenError>;
}
