// ============================================================
// Layer 5 — Tree Ensemble Classifier
// ============================================================
// The concrete shape of the frozen model artifact: a forest of
// binary decision trees whose leaf scores are averaged and
// thresholded into a {0, 1} label. This is the serialized form
// of the extra-trees model the screening system was trained
// with — training itself happened elsewhere and is frozen.
//
// Tree encoding: a flat Vec of nodes, root at index 0. A split
// node compares one feature against a threshold and names the
// child indices; a leaf node carries the positive-class score.
// Flat indices rather than boxed children keep the serde derive
// trivial and the traversal a tight loop.
//
// Reference: Rust Book §6 (Enums), serde derive docs

use serde::{Deserialize, Serialize};

use crate::domain::error::ScreenError;
use crate::domain::feature::{FeatureVector, Label};
use crate::domain::traits::Classifier;

/// One node of a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Branch left when `features[feature] <= threshold`,
    /// otherwise right.
    Split {
        feature:   usize,
        threshold: f64,
        left:      usize,
        right:     usize,
    },
    /// Terminal node holding the positive-class score.
    Leaf { value: f64 },
}

/// A single decision tree, root at node 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf and return its score.
    ///
    /// `check_against` verified node indices at load time, so a
    /// walk off the end of `nodes` can only mean the artifact
    /// was swapped out from under us; report it, don't panic.
    fn score(&self, features: &FeatureVector) -> Result<f64, ScreenError> {
        let mut idx = 0usize;
        // A well-formed tree reaches a leaf in at most nodes.len()
        // steps; more than that means a cycle.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let v = features.values().get(*feature).copied().ok_or_else(|| {
                        ScreenError::Inference {
                            reason: format!("tree references feature index {feature}"),
                        }
                    })?;
                    idx = if v <= *threshold { *left } else { *right };
                }
                None => break,
            }
        }
        Err(ScreenError::Inference {
            reason: "malformed decision tree: no leaf reached".into(),
        })
    }
}

/// The frozen classifier artifact: averaged trees plus the
/// decision threshold the mean score is compared against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Arity the forest was fitted on; must match the vector.
    pub n_features: usize,
    pub trees:      Vec<DecisionTree>,
    /// Mean scores at or above this are the positive class.
    pub threshold:  f64,
}

impl TreeEnsemble {
    /// Structural sanity check, run once right after load.
    ///
    /// An ensemble with no trees, a nonsense threshold, or a
    /// node pointing outside its tree has no usable predict
    /// capability and must be rejected before serving.
    pub fn check_against(&self, expected_arity: usize) -> Result<(), String> {
        if self.n_features != expected_arity {
            return Err(format!(
                "model was fitted on {} features, this pipeline produces {}",
                self.n_features, expected_arity,
            ));
        }
        if self.trees.is_empty() {
            return Err("model contains no trees".into());
        }
        if !self.threshold.is_finite() {
            return Err(format!("decision threshold {} is not finite", self.threshold));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {t} is empty"));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split { feature, left, right, .. } = node {
                    if *feature >= self.n_features {
                        return Err(format!(
                            "tree {t} node {n} splits on feature {feature}, \
                             model arity is {}",
                            self.n_features,
                        ));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(format!("tree {t} node {n} has a dangling child index"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Mean positive-class score across all trees.
    fn mean_score(&self, features: &FeatureVector) -> Result<f64, ScreenError> {
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.score(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, features: &FeatureVector) -> Result<Label, ScreenError> {
        // Defensive arity check. The validator always produces
        // eight values, so this only fires when a model fitted
        // on a different arity was configured by mistake.
        if features.len() != self.n_features {
            return Err(ScreenError::Inference {
                reason: format!(
                    "feature vector has {} values but the model expects {}",
                    features.len(),
                    self.n_features,
                ),
            });
        }
        let score = self.mean_score(features)?;
        tracing::debug!("ensemble mean score {:.4} (threshold {})", score, self.threshold);
        Ok(Label::from_score(score, self.threshold))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// A one-split stump: Glucose (feature 1) <= 130 scores low,
    /// above scores high.
    fn glucose_stump() -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split { feature: 1, threshold: 130.0, left: 1, right: 2 },
                TreeNode::Leaf { value: 0.1 },
                TreeNode::Leaf { value: 0.9 },
            ],
        }
    }

    fn ensemble() -> TreeEnsemble {
        TreeEnsemble {
            n_features: 8,
            trees:      vec![glucose_stump()],
            threshold:  0.5,
        }
    }

    fn vec_with_glucose(g: f64) -> FeatureVector {
        FeatureVector::new([2.0, g, 70.0, 20.0, 79.0, 25.0, 0.5, 33.0])
    }

    #[test]
    fn test_predict_is_binary_and_deterministic() {
        let model = ensemble();
        let low  = model.predict(&vec_with_glucose(120.0)).unwrap();
        let high = model.predict(&vec_with_glucose(160.0)).unwrap();
        assert_eq!(low, Label::Negative);
        assert_eq!(high, Label::Positive);
        // Same input, same output — no hidden state.
        assert_eq!(model.predict(&vec_with_glucose(160.0)).unwrap(), high);
    }

    #[test]
    fn test_scores_are_averaged_across_trees() {
        // Two stumps disagree on glucose 120: 0.1 and 0.95
        // average to 0.525, which crosses the 0.5 threshold.
        let optimist = DecisionTree {
            nodes: vec![TreeNode::Leaf { value: 0.95 }],
        };
        let model = TreeEnsemble {
            n_features: 8,
            trees:      vec![glucose_stump(), optimist],
            threshold:  0.5,
        };
        assert_eq!(model.predict(&vec_with_glucose(120.0)).unwrap(), Label::Positive);
    }

    #[test]
    fn test_arity_mismatch_is_an_inference_error() {
        let mut model = ensemble();
        model.n_features = 4;
        let err = model.predict(&vec_with_glucose(120.0)).unwrap_err();
        assert!(matches!(err, ScreenError::Inference { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_check_rejects_empty_forest() {
        let model = TreeEnsemble { n_features: 8, trees: vec![], threshold: 0.5 };
        assert!(model.check_against(8).is_err());
    }

    #[test]
    fn test_check_rejects_dangling_child_index() {
        let model = TreeEnsemble {
            n_features: 8,
            trees: vec![DecisionTree {
                nodes: vec![TreeNode::Split {
                    feature:   0,
                    threshold: 1.0,
                    left:      1,
                    right:     99,
                }, TreeNode::Leaf { value: 0.0 }],
            }],
            threshold: 0.5,
        };
        assert!(model.check_against(8).is_err());
    }

    #[test]
    fn test_check_rejects_wrong_arity() {
        let model = TreeEnsemble { n_features: 4, trees: vec![glucose_stump()], threshold: 0.5 };
        assert!(model.check_against(8).is_err());
    }

    #[test]
    fn test_check_accepts_a_well_formed_forest() {
        assert!(ensemble().check_against(8).is_ok());
    }
}
