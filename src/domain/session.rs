// ============================================================
// Layer 3 — Session State
// ============================================================
// Holds the current value of every form field for one user's
// session. The reference system kept this in a framework-global
// keyed by field name; here it is an explicit value object owned
// by the session handler, so there is no hidden mutable state.
//
// Two logical phases:
//   Editing   — the user may change any field
//   Submitted — set right after Predict runs; transient, any
//               edit or reset collapses it back to Editing
//
// Reset is total and idempotent: after reset, every field holds
// exactly its declared default.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use std::collections::HashMap;

use crate::domain::field_spec::{Field, FieldSpec, FEATURE_COUNT, FIELD_SPECS};

/// Which interaction phase the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

/// One user's form values, created with defaults at session start
/// and destroyed at session end. Never shared across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    values: [f64; FEATURE_COUNT],
    phase:  Phase,
}

impl SessionState {
    /// Fresh session with every field at its declared default.
    pub fn new(specs: &[FieldSpec; FEATURE_COUNT]) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, spec) in values.iter_mut().zip(specs.iter()) {
            *slot = spec.default;
        }
        Self { values, phase: Phase::Editing }
    }

    /// The Clear action: put every field back to its default.
    pub fn reset(&mut self, specs: &[FieldSpec; FEATURE_COUNT]) {
        for (slot, spec) in self.values.iter_mut().zip(specs.iter()) {
            *slot = spec.default;
        }
        self.phase = Phase::Editing;
    }

    pub fn get(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    /// A user edit. Any edit re-opens a submitted session.
    pub fn set(&mut self, field: Field, value: f64) {
        self.values[field.index()] = value;
        self.phase = Phase::Editing;
    }

    /// Called right after Predict runs on this session's values.
    pub fn mark_submitted(&mut self) {
        self.phase = Phase::Submitted;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of the form as a field→value mapping, the shape
    /// the validator consumes.
    pub fn raw_values(&self) -> HashMap<Field, f64> {
        Field::ALL
            .iter()
            .map(|f| (*f, self.values[f.index()]))
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&FIELD_SPECS)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_spec::spec_for;

    #[test]
    fn test_new_session_holds_declared_defaults() {
        let s = SessionState::new(&FIELD_SPECS);
        for field in Field::ALL {
            assert_eq!(s.get(field), spec_for(field).default);
        }
        assert_eq!(s.phase(), Phase::Editing);
    }

    #[test]
    fn test_reset_is_idempotent_and_total() {
        let mut once = SessionState::new(&FIELD_SPECS);
        once.set(Field::Glucose, 180.0);
        once.set(Field::Bmi, 42.5);
        once.reset(&FIELD_SPECS);

        let mut twice = once.clone();
        twice.reset(&FIELD_SPECS);

        // reset(); reset() must equal a single reset(), and every
        // field must equal its declared default exactly.
        assert_eq!(once, twice);
        for field in Field::ALL {
            assert_eq!(once.get(field), spec_for(field).default);
        }
    }

    #[test]
    fn test_edit_collapses_submitted_back_to_editing() {
        let mut s = SessionState::new(&FIELD_SPECS);
        s.mark_submitted();
        assert_eq!(s.phase(), Phase::Submitted);

        s.set(Field::Age, 40.0);
        assert_eq!(s.phase(), Phase::Editing);
    }

    #[test]
    fn test_reset_collapses_submitted_back_to_editing() {
        let mut s = SessionState::new(&FIELD_SPECS);
        s.mark_submitted();
        s.reset(&FIELD_SPECS);
        assert_eq!(s.phase(), Phase::Editing);
    }

    #[test]
    fn test_raw_values_covers_every_field() {
        let s = SessionState::new(&FIELD_SPECS);
        let raw = s.raw_values();
        assert_eq!(raw.len(), FEATURE_COUNT);
        for field in Field::ALL {
            assert_eq!(raw[&field], spec_for(field).default);
        }
    }
}
