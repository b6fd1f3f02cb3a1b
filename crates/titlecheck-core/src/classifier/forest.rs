use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Verdict};
use crate::error::{Result, TitlecheckError};
use crate::vectorize::SparseVector;

/// One node of a decision tree in flattened array form
///
/// A node is a leaf when `feature` is negative or either child is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub feature: i64,
    pub threshold: f64,
    pub left: i64,
    pub right: i64,
    /// Per-class sample counts (or weights) reaching this node
    pub value: Vec<f64>,
}

impl TreeNode {
    fn is_leaf(&self) -> bool {
        self.feature < 0 || self.left < 0 || self.right < 0
    }
}

/// Decision tree; node 0 is the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to the leaf selected by `vector`
    ///
    /// Goes left when the feature value, rounded to `f32` as trained trees
    /// see their inputs, is `<=` the node threshold. A walk longer than the
    /// node count means the tree is malformed.
    fn leaf(&self, vector: &SparseVector) -> Option<&TreeNode> {
        let mut node = self.nodes.first()?;
        for _ in 0..self.nodes.len() {
            if node.is_leaf() {
                return Some(node);
            }
            let value = f64::from(vector.get(node.feature as usize) as f32);
            let next = if value <= node.threshold {
                node.left
            } else {
                node.right
            };
            node = self.nodes.get(next as usize)?;
        }
        None
    }

    fn validate(&self, tree: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(invalid_tree(tree, "no nodes"));
        }

        for (id, node) in self.nodes.iter().enumerate() {
            if node.is_leaf() {
                if node.value.len() != n_classes {
                    return Err(invalid_tree(
                        tree,
                        format!(
                            "leaf {} has {} class values, expected {}",
                            id,
                            node.value.len(),
                            n_classes
                        ),
                    ));
                }
                continue;
            }

            for child in [node.left, node.right] {
                let child = child as usize;
                if child <= id || child >= self.nodes.len() {
                    return Err(invalid_tree(
                        tree,
                        format!("node {} has invalid child {}", id, child),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn invalid_tree(tree: usize, reason: impl std::fmt::Display) -> TitlecheckError {
    TitlecheckError::invalid_value("random forest", format!("tree {}: {}", tree, reason))
}

/// Ensemble of decision trees voting with averaged class probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Class labels in the order used by leaf values
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,

    /// Label meaning "plagiarized"
    #[serde(default = "default_positive_class")]
    pub positive_class: i64,

    /// Number of features the forest was trained on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_features: Option<usize>,

    pub trees: Vec<DecisionTree>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

fn default_positive_class() -> i64 {
    1
}

impl RandomForest {
    /// Check that every tree can be walked without leaving the node array
    pub fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            crate::bail_invalid!("random forest", "no trees");
        }
        if self.classes.len() < 2 {
            crate::bail_invalid!("random forest classes", format!("{:?}", self.classes));
        }
        if !self.classes.contains(&self.positive_class) {
            crate::bail_invalid!("random forest positive_class", self.positive_class);
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.classes.len())?;
        }
        Ok(())
    }

    /// Averaged class probabilities over all trees
    pub fn predict_proba(&self, vector: &SparseVector) -> Vec<f64> {
        let mut proba = vec![0.0; self.classes.len()];

        for tree in &self.trees {
            let Some(leaf) = tree.leaf(vector) else {
                continue;
            };
            let total: f64 = leaf.value.iter().sum();
            if total <= 0.0 {
                continue;
            }
            for (p, v) in proba.iter_mut().zip(&leaf.value) {
                *p += v / total;
            }
        }

        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        proba
    }

    /// Predicted class label; the first class wins ties
    pub fn predict_class(&self, vector: &SparseVector) -> i64 {
        let proba = self.predict_proba(vector);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes[best]
    }
}

impl Classifier for RandomForest {
    fn predict(&self, vector: &SparseVector) -> Verdict {
        Verdict::from(self.predict_class(vector) == self.positive_class)
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}
