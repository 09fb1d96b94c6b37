// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod metric;
pub mod node;
pub mod partition;
pub mod sample;
pub mod stats;
pub mod traverse;
pub mod tree;

// Individual classes, and functions
pub use data::Dataset;
pub use errors::TreeError;
pub use node::TreeNode;
pub use tree::DecisionTree;
