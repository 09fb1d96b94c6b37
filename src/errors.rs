//! Errors
//!
//! Custom error types used throughout the `arbor` crate.
use thiserror::Error;

/// Errors that can occur while building or querying a decision tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No variance in a column, so correlation against it is undefined.
    #[error("Column number {0} has no variance, correlation against it is undefined.")]
    DegenerateColumn(usize),
    /// A threshold failed to separate the records.
    #[error("Splitting on feature {0} at threshold {1} leaves one side empty.")]
    EmptySplit(String, f64),
    /// The tree structure cannot answer a prediction.
    #[error("Malformed tree: {0}.")]
    MalformedTree(String),
    /// A name was not found in the header or feature list.
    #[error("Feature {0} is not present in the header or feature list.")]
    UnknownFeature(String),
    /// First value is the cell content, second is the row, third is the column.
    #[error("Unable to parse value {0} at row {1}, column {2} as a number.")]
    ParseError(String, usize, usize),
    /// The dataset holds a header but no records.
    #[error("The dataset contains no records.")]
    EmptyDataset,
    /// The dataset has no header row.
    #[error("The dataset has no header row.")]
    MissingHeader,
    /// First value is the row, second is the expected width, third is what was found.
    #[error("Row {0} has {2} cells, expected {1}.")]
    RaggedRow(usize, usize, usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from file: {0}")]
    UnableToRead(String),
}
