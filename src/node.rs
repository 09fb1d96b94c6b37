//! Tree nodes
//!
//! A fitted tree is a recursive structure of decision nodes and leaves. A
//! decision node always carries both children, so a half-built node cannot be
//! represented.
use crate::data::parse_cell;
use crate::errors::TreeError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// An internal split on a feature at a threshold.
    Decision {
        feature: String,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// A terminal node holding the predicted value.
    Leaf { value: f64 },
}

impl TreeNode {
    /// Create a leaf holding a prediction.
    pub fn leaf(value: f64) -> Self {
        TreeNode::Leaf { value }
    }

    /// Create a decision node with both of its subtrees.
    pub fn decision(feature: String, threshold: f64, left: TreeNode, right: TreeNode) -> Self {
        TreeNode::Decision {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The split feature name, for decision nodes.
    pub fn feature(&self) -> Option<&str> {
        match self {
            TreeNode::Decision { feature, .. } => Some(feature),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// The split threshold, for decision nodes.
    pub fn threshold(&self) -> Option<f64> {
        match self {
            TreeNode::Decision { threshold, .. } => Some(*threshold),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// The child taken when a value is at or below the threshold.
    pub fn left(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Decision { left, .. } => Some(left),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// The child taken when a value is above the threshold.
    pub fn right(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Decision { right, .. } => Some(right),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// The predicted value, for leaves.
    pub fn value(&self) -> Option<f64> {
        match self {
            TreeNode::Leaf { value } => Some(*value),
            TreeNode::Decision { .. } => None,
        }
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Decision { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves beneath this node, counting the node itself if it is one.
    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// Predict the target value for a single data point.
    ///
    /// The data point holds one cell per feature, in feature-list order.
    /// Values at or below a node's threshold descend left, values above it
    /// descend right.
    ///
    /// * `row` - The data point to predict.
    /// * `features` - Names of the feature columns, in the order the data
    ///     point's cells follow.
    pub fn predict(&self, row: &[String], features: &[String]) -> Result<f64, TreeError> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Decision {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let col = features
                        .iter()
                        .position(|f| f == feature)
                        .ok_or_else(|| TreeError::UnknownFeature(feature.clone()))?;
                    let cell = row.get(col).ok_or_else(|| {
                        TreeError::MalformedTree(format!(
                            "the split on {} reads column {} but the data point has {} cells",
                            feature,
                            col,
                            row.len()
                        ))
                    })?;
                    let value = parse_cell(cell, 0, col)?;
                    node = if value <= *threshold { left } else { right };
                }
            }
        }
    }
}

impl Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeNode::Leaf { value } => write!(f, "Value: {}", value),
            TreeNode::Decision {
                feature, threshold, ..
            } => write!(f, "{} <= {}", feature, threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample_tree() -> TreeNode {
        TreeNode::decision(
            "A".to_string(),
            2.0,
            TreeNode::decision(
                "B".to_string(),
                5.0,
                TreeNode::leaf(10.0),
                TreeNode::leaf(20.0),
            ),
            TreeNode::leaf(30.0),
        )
    }

    #[test]
    fn test_accessors() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.feature(), Some("A"));
        assert_eq!(tree.threshold(), Some(2.0));
        assert_eq!(tree.value(), None);
        assert!(tree.left().is_some());

        let leaf = tree.right().unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.value(), Some(30.0));
        assert_eq!(leaf.feature(), None);
        assert_eq!(leaf.left(), None);
    }

    #[test]
    fn test_depth_and_leaf_count() {
        let tree = sample_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(TreeNode::leaf(1.0).depth(), 0);
        assert_eq!(TreeNode::leaf(1.0).n_leaves(), 1);
    }

    #[test]
    fn test_display() {
        let tree = sample_tree();
        assert_eq!(format!("{}", tree), "A <= 2");
        assert_eq!(format!("{}", TreeNode::leaf(12.5)), "Value: 12.5");
    }

    #[test]
    fn test_predict_walk() {
        let tree = sample_tree();
        let features = strings(&["A", "B"]);
        assert_eq!(tree.predict(&strings(&["1", "4"]), &features).unwrap(), 10.0);
        assert_eq!(tree.predict(&strings(&["1", "6"]), &features).unwrap(), 20.0);
        assert_eq!(tree.predict(&strings(&["3", "0"]), &features).unwrap(), 30.0);
    }

    #[test]
    fn test_predict_threshold_value_goes_left() {
        let tree = sample_tree();
        let features = strings(&["A", "B"]);
        assert_eq!(tree.predict(&strings(&["2", "5"]), &features).unwrap(), 10.0);
    }

    #[test]
    fn test_predict_unknown_feature() {
        let tree = sample_tree();
        let features = strings(&["A", "C"]);
        let err = tree.predict(&strings(&["1", "4"]), &features).unwrap_err();
        assert!(matches!(err, TreeError::UnknownFeature(name) if name == "B"));
    }

    #[test]
    fn test_predict_short_data_point() {
        let tree = sample_tree();
        let features = strings(&["A", "B"]);
        let err = tree.predict(&strings(&["1"]), &features).unwrap_err();
        assert!(matches!(err, TreeError::MalformedTree(_)));
    }

    #[test]
    fn test_predict_unparseable_cell() {
        let tree = sample_tree();
        let features = strings(&["A", "B"]);
        let err = tree.predict(&strings(&["1", "huh"]), &features).unwrap_err();
        assert!(matches!(err, TreeError::ParseError(value, 0, 1) if value == "huh"));
    }

    #[test]
    fn test_serde_round_trip() {
        let tree = sample_tree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
