// ============================================================
// Layer 3 — FeatureVector Domain Type
// ============================================================
// The classifier's only input: exactly eight numbers, in the
// order the model was fitted on. A plain [f64; 8] wrapped in a
// newtype so the rest of the code cannot hand the model a
// wrong-length or reordered slice by accident.
//
// Reference: Rust Book §5 (Structs), §19 (Newtype pattern)

use crate::domain::field_spec::{Field, FEATURE_COUNT};

/// An ordered, fixed-arity feature vector.
///
/// Index 0 is Pregnancies, index 7 is Age — see `Field::ALL`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// All eight values in fitted order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Value of a single named field.
    pub fn get(&self, field: Field) -> f64 {
        self.0[field.index()]
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

/// The classifier's output: diabetic (positive) or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Class 0 — screening indicates no diabetes.
    Negative,
    /// Class 1 — screening indicates possible diabetes.
    Positive,
}

impl Label {
    /// Map an ensemble score to a label at the given threshold.
    pub fn from_score(score: f64, threshold: f64) -> Label {
        if score >= threshold {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_field_uses_fitted_order() {
        let v = FeatureVector::new([2.0, 120.0, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0]);
        assert_eq!(v.get(Field::Pregnancies), 2.0);
        assert_eq!(v.get(Field::Glucose), 120.0);
        assert_eq!(v.get(Field::Age), 33.0);
    }

    #[test]
    fn test_label_threshold_is_inclusive() {
        assert_eq!(Label::from_score(0.5, 0.5), Label::Positive);
        assert_eq!(Label::from_score(0.4999, 0.5), Label::Negative);
    }
}
