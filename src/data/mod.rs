// ============================================================
// Layer 4 — Input Pipeline
// ============================================================
// This layer turns whatever the user typed into the vector the
// classifier expects. The pipeline flows in this order:
//
//   raw field→value map
//       │
//       ▼
//   Validator      → defaults for absent fields, bounds check,
//       │            coercion to the field's numeric kind
//       ▼
//   Transformer    → applies the fitted scaler, or nothing at
//       │            all when no scaler is configured
//       ▼
//   FeatureVector  → ready for the classifier
//
// Each module is responsible for exactly one step, so each step
// is independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Bounds checking and numeric coercion for raw form input
pub mod validator;

/// Optional fitted-scaler application (identity when absent)
pub mod transformer;
