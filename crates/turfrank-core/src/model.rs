//! Fitted regression forest for turf scoring
//!
//! The model is produced by an offline fitting process and loaded here
//! read-only. Prediction is the mean of the per-tree outputs; each tree
//! is a binary decision tree walked from node 0. The model's input width
//! must match the feature schema it was fit against; artifact loading
//! asserts this once so a mismatch never surfaces per request.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TurfRankError};

/// One node of a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// Internal split: go left when `features[feature] <= threshold`
    Branch {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the tree's output
    Leaf { value: f64 },
}

/// A single regression tree, nodes indexed from the root at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree for one feature vector.
    fn evaluate(&self, features: &[f64]) -> Result<f64> {
        let mut idx = 0usize;
        // Bounded by node count; a well-formed tree terminates earlier
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(TurfRankError::invalid_artifact(
                        "model",
                        format!("node index {} out of range", idx),
                    ))
                }
            }
        }
        Err(TurfRankError::invalid_artifact(
            "model",
            "tree walk did not reach a leaf",
        ))
    }
}

/// A fitted regression forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreModel {
    /// Input vector width the model was fit against
    pub n_features: usize,
    /// Ensemble members; prediction is their mean output
    pub trees: Vec<Tree>,
}

impl ScoreModel {
    /// Validate the frozen structure: at least one tree, every branch
    /// child index in range, every branch feature within `n_features`.
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(TurfRankError::invalid_artifact("model", "no trees"));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            for node in &tree.nodes {
                if let TreeNode::Branch {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.n_features {
                        return Err(TurfRankError::invalid_artifact(
                            "model",
                            format!("tree {} splits on feature {} of {}", t, feature, self.n_features),
                        ));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(TurfRankError::invalid_artifact(
                            "model",
                            format!("tree {} has a child index out of range", t),
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Predict a scalar score for one feature vector.
    ///
    /// Pure function of the frozen parameters and the input; errors only
    /// on an input width disagreeing with `n_features`.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(TurfRankError::ArtifactMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}
