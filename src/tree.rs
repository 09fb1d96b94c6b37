//! Decision tree
//!
//! Correlation-guided recursive partitioning over tabular data, along with
//! the prediction, persistence, and inspection surface of the fitted model.
use crate::constants::{DEFAULT_MAX_DEPTH, SCORE_TOLERANCE};
use crate::data::Dataset;
use crate::errors::TreeError;
use crate::node::TreeNode;
use crate::partition::split;
use crate::stats::{correlation, mean, median};
use hashbrown::HashMap;
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;

/// Decision tree regressor object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Maximum number of split levels between the root and any leaf.
    pub max_depth: usize,
    /// Score gap within which two features count as tied, and the spread
    /// within which a target column counts as constant.
    pub tolerance: f64,
    /// Metadata for the tree.
    pub metadata: HashMap<String, String>,
    root: Option<TreeNode>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, SCORE_TOLERANCE).unwrap()
    }
}

impl DecisionTree {
    /// Decision tree regressor object
    ///
    /// * `max_depth` - Maximum number of split levels between the root and any leaf.
    /// * `tolerance` - Score gap within which two features count as tied, and
    ///     the spread within which a target column counts as constant.
    pub fn new(max_depth: usize, tolerance: f64) -> Result<Self, TreeError> {
        let tree = DecisionTree {
            max_depth,
            tolerance,
            metadata: HashMap::new(),
            root: None,
        };
        tree.validate_parameters()?;
        Ok(tree)
    }

    pub fn validate_parameters(&self) -> Result<(), TreeError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(TreeError::InvalidParameter(
                "tolerance".to_string(),
                "a finite non-negative value".to_string(),
                self.tolerance.to_string(),
            ));
        }
        Ok(())
    }

    /// Set the max_depth on the tree.
    /// * `max_depth` - Maximum number of split levels.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the tolerance on the tree.
    /// * `tolerance` - Score gap treated as a tie.
    pub fn set_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fit the tree on a provided dataset.
    ///
    /// * `data` - Tabular records with a leading header row.
    /// * `features` - Names of the candidate split columns. The names must
    ///     appear in the header and exclude the target.
    /// * `target` - Name of the column to predict.
    pub fn fit(&mut self, data: &Dataset, features: &[String], target: &str) -> Result<(), TreeError> {
        let target_col = data.column_index(target)?;
        if data.n_records() == 0 {
            return Err(TreeError::EmptyDataset);
        }
        for feature in features {
            if data.column_index(feature)? == target_col {
                return Err(TreeError::InvalidParameter(
                    "features".to_string(),
                    "columns other than the target".to_string(),
                    feature.clone(),
                ));
            }
        }
        let root = build(data, features, target_col, 0, self.max_depth, self.tolerance)?;
        info!(
            "Fitted a tree with {0} leaves and depth {1} from {2} records.",
            root.n_leaves(),
            root.depth(),
            data.n_records()
        );
        self.root = Some(root);
        Ok(())
    }

    /// The root node of the fitted tree, if any.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Number of edges on the longest root-to-leaf path, 0 before fitting.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.depth())
    }

    /// Number of leaves, 0 before fitting.
    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.n_leaves())
    }

    /// Predict the target value for a single data point.
    ///
    /// * `row` - The data point, one cell per feature in feature-list order.
    /// * `features` - Names of the feature columns, in the order used at fit.
    pub fn predict_row(&self, row: &[String], features: &[String]) -> Result<f64, TreeError> {
        match &self.root {
            Some(root) => root.predict(row, features),
            None => Err(TreeError::MalformedTree(
                "the tree has not been fitted".to_string(),
            )),
        }
    }

    /// Generate predictions on a batch of data points.
    ///
    /// * `rows` - The data points, one cell per feature in feature-list order.
    /// * `features` - Names of the feature columns, in the order used at fit.
    /// * `parallel` - Predict in parallel.
    pub fn predict(
        &self,
        rows: &[Vec<String>],
        features: &[String],
        parallel: bool,
    ) -> Result<Vec<f64>, TreeError> {
        if parallel {
            self.predict_parallel(rows, features)
        } else {
            self.predict_single_threaded(rows, features)
        }
    }

    fn predict_single_threaded(&self, rows: &[Vec<String>], features: &[String]) -> Result<Vec<f64>, TreeError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| self.predict_batch_row(i, row, features))
            .collect()
    }

    fn predict_parallel(&self, rows: &[Vec<String>], features: &[String]) -> Result<Vec<f64>, TreeError> {
        rows.par_iter()
            .enumerate()
            .map(|(i, row)| self.predict_batch_row(i, row, features))
            .collect()
    }

    // Parse errors carry the position of the data point within the batch.
    fn predict_batch_row(&self, i: usize, row: &[String], features: &[String]) -> Result<f64, TreeError> {
        self.predict_row(row, features).map_err(|e| match e {
            TreeError::ParseError(value, _, col) => TreeError::ParseError(value, i, col),
            other => other,
        })
    }

    /// Count how often each feature is used as a split.
    ///
    /// * `normalize` - Whether to divide the counts by their total.
    pub fn calculate_feature_importance(&self, normalize: bool) -> HashMap<String, f64> {
        let mut importance: HashMap<String, f64> = HashMap::new();
        if let Some(root) = &self.root {
            for node in root.pre_order() {
                if let Some(feature) = node.feature() {
                    *importance.entry(feature.to_string()).or_insert(0.0) += 1.0;
                }
            }
        }
        if normalize {
            let total: f64 = importance.values().sum();
            if total > 0.0 {
                return importance.iter().map(|(k, v)| (k.clone(), v / total)).collect();
            }
        }
        importance
    }

    /// Save the tree as a json object to a file.
    ///
    /// * `path` - Path to save the tree.
    pub fn save(&self, path: &str) -> Result<(), TreeError> {
        let model = self.json_dump()?;
        match fs::write(path, model) {
            Err(e) => Err(TreeError::UnableToWrite(e.to_string())),
            Ok(_) => Ok(()),
        }
    }

    /// Dump the tree as a json object
    pub fn json_dump(&self) -> Result<String, TreeError> {
        match serde_json::to_string(self) {
            Ok(s) => Ok(s),
            Err(e) => Err(TreeError::UnableToWrite(e.to_string())),
        }
    }

    /// Load a tree from a json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    pub fn from_json(json_str: &str) -> Result<Self, TreeError> {
        let model = serde_json::from_str::<DecisionTree>(json_str);
        match model {
            Ok(m) => Ok(m),
            Err(e) => Err(TreeError::UnableToRead(e.to_string())),
        }
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load the tree from.
    pub fn load(path: &str) -> Result<Self, TreeError> {
        let json_str = match fs::read_to_string(path) {
            Ok(s) => Ok(s),
            Err(e) => Err(TreeError::UnableToRead(e.to_string())),
        }?;
        Self::from_json(&json_str)
    }

    /// Insert metadata
    /// * `key` - String value for the metadata key.
    /// * `value` - value to assign to the metadata key.
    pub fn insert_metadata(&mut self, key: String, value: String) {
        self.metadata.insert(key, value);
    }

    /// Get Metadata
    /// * `key` - Get the associated value for the metadata key.
    pub fn get_metadata(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }
}

impl Display for DecisionTree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(&TreeNode, usize)> = Vec::new();
        if let Some(root) = &self.root {
            print_buffer.push((root, 0));
        }
        let mut r = String::new();
        while let Some((node, depth)) = print_buffer.pop() {
            r += format!("{}{}\n", "      ".repeat(depth).as_str(), node).as_str();
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                print_buffer.push((right, depth + 1));
                print_buffer.push((left, depth + 1));
            }
        }
        write!(f, "{}", r)
    }
}

/// Grow a subtree over a subset of the records.
///
/// Stopping conditions are checked in priority order: the depth budget, an
/// empty feature list, then a target column constant within `tolerance`.
/// Leaves hold the mean target value of their subset. Features stay
/// candidates at every level, so a feature can be split on repeatedly.
pub fn build(
    data: &Dataset,
    features: &[String],
    target_col: usize,
    depth: usize,
    max_depth: usize,
    tolerance: f64,
) -> Result<TreeNode, TreeError> {
    if depth >= max_depth || features.is_empty() || is_constant(data, target_col, tolerance)? {
        return Ok(TreeNode::leaf(mean(data, target_col)?));
    }
    let (col, feature) = match select_best_feature(data, features, target_col, tolerance)? {
        Some(best) => best,
        None => {
            warn!("Every candidate feature is constant at depth {0}, stopping early.", depth);
            return Ok(TreeNode::leaf(mean(data, target_col)?));
        }
    };
    let threshold = median(data, col)?;
    match split(data, col, threshold) {
        Ok((left_data, right_data)) => {
            let left = build(&left_data, features, target_col, depth + 1, max_depth, tolerance)?;
            let right = build(&right_data, features, target_col, depth + 1, max_depth, tolerance)?;
            Ok(TreeNode::decision(feature, threshold, left, right))
        }
        // A split that moves nothing would recurse forever, cut a leaf instead.
        Err(TreeError::EmptySplit(..)) => Ok(TreeNode::leaf(mean(data, target_col)?)),
        Err(e) => Err(e),
    }
}

/// Rank the candidate features by absolute correlation with the target.
///
/// Features whose column has no variance are skipped. Candidates within
/// `tolerance` of the best score count as tied, and the tie goes to the
/// lexicographically smallest feature name, independent of list order.
/// Returns the winning column and feature name, or `None` when every
/// candidate was skipped.
pub fn select_best_feature(
    data: &Dataset,
    features: &[String],
    target_col: usize,
    tolerance: f64,
) -> Result<Option<(usize, String)>, TreeError> {
    let mut scored: Vec<(usize, &String, f64)> = Vec::with_capacity(features.len());
    for feature in features {
        let col = data.column_index(feature)?;
        match correlation(data, col, target_col) {
            Ok(score) => scored.push((col, feature, score.abs())),
            Err(TreeError::DegenerateColumn(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    let best_score = scored.iter().map(|(_, _, s)| *s).fold(f64::NEG_INFINITY, f64::max);
    let winner = scored
        .iter()
        .filter(|(_, _, s)| best_score - s <= tolerance)
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|&(col, feature, _)| (col, feature.clone()));
    Ok(winner)
}

fn is_constant(data: &Dataset, col: usize, tolerance: f64) -> Result<bool, TreeError> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for i in 0..data.n_records() {
        let v = data.numeric(i, col)?;
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok(hi - lo <= tolerance)
}
