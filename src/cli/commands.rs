// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `predict`, `form`, `fields`,
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, PathBuf, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::domain::field_spec::Field;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one screening from command-line flags
    Predict(PredictArgs),

    /// Open an interactive form session (set / predict / clear)
    Form(FormArgs),

    /// Print the field table: bounds, steps, and defaults
    Fields,
}

/// Which artifacts this deployment runs with.
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Path to the frozen classifier artifact
    #[arg(long, default_value = "models/model.json")]
    pub model: PathBuf,

    /// Path to the fitted feature scaler. When given, the scaler
    /// is mandatory and every submission is scaled before
    /// inference; when omitted, raw values go to the model.
    #[arg(long)]
    pub scaler: Option<PathBuf>,
}

/// All arguments for the `predict` command. Every measurement
/// flag is optional; an omitted field takes its declared
/// default, exactly as an untouched form field would.
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Number of times pregnant
    #[arg(long)]
    pub pregnancies: Option<f64>,

    /// Plasma glucose concentration
    #[arg(long)]
    pub glucose: Option<f64>,

    /// Diastolic blood pressure (mm Hg)
    #[arg(long)]
    pub blood_pressure: Option<f64>,

    /// Triceps skin fold thickness (mm)
    #[arg(long)]
    pub skin_thickness: Option<f64>,

    /// 2-Hour serum insulin (mu U/ml)
    #[arg(long)]
    pub insulin: Option<f64>,

    /// Body mass index (weight in kg/(height in m)^2)
    #[arg(long)]
    pub bmi: Option<f64>,

    /// Diabetes pedigree function
    #[arg(long)]
    pub pedigree: Option<f64>,

    /// Age (years)
    #[arg(long)]
    pub age: Option<f64>,
}

impl PredictArgs {
    /// Collect the provided flags into the field→value mapping
    /// the validator consumes. Omitted flags stay absent so the
    /// validator substitutes the declared defaults.
    pub fn raw_values(&self) -> HashMap<Field, f64> {
        let provided = [
            (Field::Pregnancies, self.pregnancies),
            (Field::Glucose, self.glucose),
            (Field::BloodPressure, self.blood_pressure),
            (Field::SkinThickness, self.skin_thickness),
            (Field::Insulin, self.insulin),
            (Field::Bmi, self.bmi),
            (Field::DiabetesPedigreeFunction, self.pedigree),
            (Field::Age, self.age),
        ];
        provided
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect()
    }
}

/// All arguments for the `form` command
#[derive(Args, Debug)]
pub struct FormArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts() -> ArtifactArgs {
        ArtifactArgs {
            model:  PathBuf::from("models/model.json"),
            scaler: None,
        }
    }

    #[test]
    fn test_omitted_flags_stay_absent() {
        let args = PredictArgs {
            artifacts:      artifacts(),
            pregnancies:    None,
            glucose:        Some(120.0),
            blood_pressure: None,
            skin_thickness: None,
            insulin:        None,
            bmi:            Some(25.0),
            pedigree:       None,
            age:            None,
        };
        let raw = args.raw_values();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[&Field::Glucose], 120.0);
        assert_eq!(raw[&Field::Bmi], 25.0);
        assert!(!raw.contains_key(&Field::Age));
    }
}
