// ============================================================
// Layer 5 — Standard Scaler
// ============================================================
// The concrete shape of the frozen scaler artifact: one mean
// and one scale per feature, fitted during training and applied
// identically here as (x - mean) / scale. The classifier in the
// scaled deployment was fitted on z-scored inputs, so feeding
// it anything else silently wrecks its predictions — which is
// why the transformer never bypasses a configured scaler.

use serde::{Deserialize, Serialize};

use crate::domain::error::ScreenError;
use crate::domain::feature::FeatureVector;
use crate::domain::field_spec::FEATURE_COUNT;
use crate::domain::traits::FeatureScaler;

/// Fitted per-feature z-score parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean:  Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Structural sanity check, run once right after load.
    pub fn check_against(&self, expected_arity: usize) -> Result<(), String> {
        if self.mean.len() != expected_arity || self.scale.len() != expected_arity {
            return Err(format!(
                "scaler was fitted on {} features, this pipeline produces {}",
                self.mean.len().min(self.scale.len()),
                expected_arity,
            ));
        }
        for (i, s) in self.scale.iter().enumerate() {
            if !s.is_finite() || *s == 0.0 {
                return Err(format!("scale[{i}] = {s} cannot divide a feature"));
            }
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err("scaler mean contains a non-finite value".into());
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ScreenError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ScreenError::Inference {
                reason: format!(
                    "scaler carries {} parameters but the vector has {FEATURE_COUNT}",
                    self.mean.len().min(self.scale.len()),
                ),
            });
        }
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = (features.values()[i] - self.mean[i]) / self.scale[i];
        }
        Ok(FeatureVector::new(out))
    }
}
