// ============================================================
// Layer 4 — Input Validator
// ============================================================
// Turns a raw field→value mapping into a validated, fixed-order
// FeatureVector.
//
// For each field, in fitted order:
//   1. Absent value       → substitute the field's default
//   2. Out of [min, max]  → reject with OutOfRange (never clamp,
//                           so the caller can re-prompt)
//   3. Coerce to the field's kind: integer fields truncate to a
//      whole number, real fields round to the step granularity
//      (0.1 for BMI, 0.01 for the pedigree function)
//
// The form layer already constrains what a user can type, but
// this component may be called from contexts with no widget in
// front of it, so it validates everything defensively anyway.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use std::collections::HashMap;

use crate::domain::error::ScreenError;
use crate::domain::feature::FeatureVector;
use crate::domain::field_spec::{Field, FieldKind, FieldSpec, FEATURE_COUNT};

/// Validate raw inputs against the field table and produce the
/// eight-element vector in fitted order.
pub fn validate(
    raw:   &HashMap<Field, f64>,
    specs: &[FieldSpec; FEATURE_COUNT],
) -> Result<FeatureVector, ScreenError> {
    let mut values = [0.0; FEATURE_COUNT];

    for (slot, spec) in values.iter_mut().zip(specs.iter()) {
        let value = raw.get(&spec.field).copied().unwrap_or(spec.default);

        // NaN fails both comparisons below on its own, but make
        // the rejection explicit rather than relying on that.
        if value.is_nan() || value < spec.min || value > spec.max {
            return Err(ScreenError::OutOfRange {
                field: spec.field,
                value,
                min:   spec.min,
                max:   spec.max,
            });
        }

        *slot = coerce(value, spec);
    }

    Ok(FeatureVector::new(values))
}

/// Snap a validated value onto the field's numeric grid.
fn coerce(value: f64, spec: &FieldSpec) -> f64 {
    match spec.kind {
        FieldKind::Integer => value.trunc(),
        FieldKind::Real => {
            // Round to the step's decimal precision. Scaling by
            // 1/step and back avoids the float noise that
            // multiplying by a non-exact step reintroduces
            // (0.1 is not representable in binary).
            let scale = (1.0 / spec.step).round();
            (value * scale).round() / scale
        }
    }
}
