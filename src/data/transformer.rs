// ============================================================
// Layer 4 — Feature Transformer
// ============================================================
// Applies the fitted scaler to a validated vector, or passes it
// through untouched when no scaler is configured. The earliest
// revision of the screening app fed raw values straight to the
// classifier, so the no-scaler path is the identity and is just
// as legitimate as the scaled one.
//
// Whether THIS scaler belongs to THIS model cannot be checked
// here; that pairing is frozen at training time and carried as
// an operational invariant.

use crate::domain::error::ScreenError;
use crate::domain::feature::FeatureVector;
use crate::domain::traits::FeatureScaler;

/// Scale the vector for the classifier, or return it unchanged
/// when the deployment carries no scaler.
pub fn transform(
    features: &FeatureVector,
    scaler:   Option<&dyn FeatureScaler>,
) -> Result<FeatureVector, ScreenError> {
    match scaler {
        Some(s) => s.transform(features),
        None    => Ok(*features),
    }
}
