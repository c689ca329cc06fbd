// ============================================================
// Layer 3 — Screening Fields
// ============================================================
// The eight medical measurements the classifier was fitted on,
// in their fitted order. The order is load-bearing: the model
// and scaler artifacts both index features positionally, so
// reordering these silently corrupts every prediction.
//
// Each field carries a FieldSpec — its numeric kind, bounds,
// step granularity, and default. The form layer uses the spec
// for prompts; the validator uses it to reject bad input.
//
// Reference: Rust Book §6 (Enums), Pima Indians Diabetes dataset

use std::fmt;

/// Number of features the classifier consumes. Never changes
/// without refitting the model artifact.
pub const FEATURE_COUNT: usize = 8;

/// One of the eight screening measurements, in fitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigreeFunction,
    Age,
}

impl Field {
    /// All fields in the order the model was fitted on.
    pub const ALL: [Field; FEATURE_COUNT] = [
        Field::Pregnancies,
        Field::Glucose,
        Field::BloodPressure,
        Field::SkinThickness,
        Field::Insulin,
        Field::Bmi,
        Field::DiabetesPedigreeFunction,
        Field::Age,
    ];

    /// Position of this field in the feature vector.
    pub fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Canonical field name, matching the dataset column names.
    pub fn name(self) -> &'static str {
        match self {
            Field::Pregnancies              => "Pregnancies",
            Field::Glucose                  => "Glucose",
            Field::BloodPressure            => "BloodPressure",
            Field::SkinThickness            => "SkinThickness",
            Field::Insulin                  => "Insulin",
            Field::Bmi                      => "BMI",
            Field::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            Field::Age                      => "Age",
        }
    }

    /// Parse a user-typed field name (case-insensitive, with a
    /// couple of short aliases for the long names).
    pub fn parse(name: &str) -> Option<Field> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "pregnancies"                        => Some(Field::Pregnancies),
            "glucose"                            => Some(Field::Glucose),
            "bloodpressure"                      => Some(Field::BloodPressure),
            "skinthickness"                      => Some(Field::SkinThickness),
            "insulin"                            => Some(Field::Insulin),
            "bmi"                                => Some(Field::Bmi),
            "diabetespedigreefunction" | "pedigree" | "dpf" => {
                Some(Field::DiabetesPedigreeFunction)
            }
            "age"                                => Some(Field::Age),
            _                                    => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a field holds whole numbers or reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole-number measurement — fractional input is truncated.
    Integer,
    /// Real-valued measurement — input is rounded to the step.
    Real,
}

/// Per-field metadata the form and validator share.
///
/// Invariant: `min <= default <= max`. `checked()` in the tests
/// below asserts this for the whole table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field:   Field,
    /// The prompt shown next to the input, taken verbatim from
    /// the screening questionnaire.
    pub label:   &'static str,
    pub kind:    FieldKind,
    pub min:     f64,
    pub max:     f64,
    pub step:    f64,
    pub default: f64,
}

/// The canonical field table, in fitted order.
pub const FIELD_SPECS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        field:   Field::Pregnancies,
        label:   "Number of times pregnant",
        kind:    FieldKind::Integer,
        min:     0.0,
        max:     20.0,
        step:    1.0,
        default: 0.0,
    },
    FieldSpec {
        field:   Field::Glucose,
        label:   "Plasma glucose concentration",
        kind:    FieldKind::Integer,
        min:     50.0,
        max:     200.0,
        step:    1.0,
        default: 100.0,
    },
    FieldSpec {
        field:   Field::BloodPressure,
        label:   "Diastolic blood pressure (mm Hg)",
        kind:    FieldKind::Integer,
        min:     30.0,
        max:     140.0,
        step:    1.0,
        default: 70.0,
    },
    FieldSpec {
        field:   Field::SkinThickness,
        label:   "Triceps skin fold thickness (mm)",
        kind:    FieldKind::Integer,
        min:     0.0,
        max:     99.0,
        step:    1.0,
        default: 20.0,
    },
    FieldSpec {
        field:   Field::Insulin,
        label:   "2-Hour serum insulin (mu U/ml)",
        kind:    FieldKind::Integer,
        min:     0.0,
        max:     900.0,
        step:    1.0,
        default: 79.0,
    },
    FieldSpec {
        field:   Field::Bmi,
        label:   "Body mass index (weight in kg/(height in m)^2)",
        kind:    FieldKind::Real,
        min:     10.0,
        max:     70.0,
        step:    0.1,
        default: 25.0,
    },
    FieldSpec {
        field:   Field::DiabetesPedigreeFunction,
        label:   "Diabetes pedigree function",
        kind:    FieldKind::Real,
        min:     0.05,
        max:     2.5,
        step:    0.01,
        default: 0.5,
    },
    FieldSpec {
        field:   Field::Age,
        label:   "Age (years)",
        kind:    FieldKind::Integer,
        min:     18.0,
        max:     120.0,
        step:    1.0,
        default: 33.0,
    },
];

/// Look up the spec for a single field.
pub fn spec_for(field: Field) -> &'static FieldSpec {
    &FIELD_SPECS[field.index()]
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_fitted_order() {
        for (i, spec) in FIELD_SPECS.iter().enumerate() {
            assert_eq!(spec.field, Field::ALL[i]);
            assert_eq!(spec.field.index(), i);
        }
    }

    #[test]
    fn test_every_default_is_in_range() {
        for spec in &FIELD_SPECS {
            assert!(
                spec.min <= spec.default && spec.default <= spec.max,
                "{} default {} outside [{}, {}]",
                spec.field, spec.default, spec.min, spec.max,
            );
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Field::parse("glucose"), Some(Field::Glucose));
        assert_eq!(Field::parse("GLUCOSE"), Some(Field::Glucose));
        assert_eq!(Field::parse("bmi"), Some(Field::Bmi));
        assert_eq!(Field::parse("dpf"), Some(Field::DiabetesPedigreeFunction));
        assert_eq!(Field::parse("cholesterol"), None);
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.name()), Some(field));
        }
    }
}
