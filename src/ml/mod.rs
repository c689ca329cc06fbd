// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All knowledge of what the frozen artifacts actually contain
// lives here. No other layer knows the model is a tree ensemble
// or that the scaler is a z-score transform — they only see the
// Classifier and FeatureScaler traits from the domain layer.
//
// What's in this layer:
//
//   ensemble.rs — The averaged decision-tree classifier.
//                 Deserialized from the model artifact; walks
//                 each tree to a leaf, averages leaf scores,
//                 thresholds the mean into a binary label.
//
//   scaler.rs   — The fitted standard scaler.
//                 Per-feature mean and scale, applied as
//                 (x - mean) / scale at inference time exactly
//                 as at fit time.
//
// Both types also know how to sanity-check themselves right
// after deserialization, so a structurally broken artifact is
// rejected at load rather than mid-prediction.

/// Averaged decision-tree binary classifier
pub mod ensemble;

/// Fitted per-feature standard (z-score) scaler
pub mod scaler;
