use crate::data::Dataset;
use crate::errors::TreeError;

/// The side of a split a record falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn keeps(&self, value: f64, threshold: f64) -> bool {
        match self {
            Side::Left => value <= threshold,
            Side::Right => value > threshold,
        }
    }
}

/// Filter the records on one side of a threshold, keeping the header and the
/// original record order. Records at the threshold fall on the left side, so
/// the two sides of a split partition the records exactly.
///
/// * `data` - The dataset to filter.
/// * `feature_col` - Index of the column compared against the threshold.
/// * `threshold` - The split value.
/// * `side` - Which side of the split to keep.
pub fn filter(data: &Dataset, feature_col: usize, threshold: f64, side: Side) -> Result<Dataset, TreeError> {
    let mut rows = Vec::with_capacity(data.n_records() + 1);
    rows.push(data.header().to_vec());
    for (i, record) in data.records().iter().enumerate() {
        let value = data.numeric(i, feature_col)?;
        if side.keeps(value, threshold) {
            rows.push(record.clone());
        }
    }
    Dataset::from_rows(rows)
}

/// Split a dataset into its left and right sides at once.
///
/// Returns [`TreeError::EmptySplit`] when the threshold fails to separate the
/// records, which callers treat as a stopping condition rather than a fault.
pub fn split(data: &Dataset, feature_col: usize, threshold: f64) -> Result<(Dataset, Dataset), TreeError> {
    let left = filter(data, feature_col, threshold, Side::Left)?;
    let right = filter(data, feature_col, threshold, Side::Right)?;
    if left.n_records() == 0 || right.n_records() == 0 {
        return Err(TreeError::EmptySplit(
            data.header()[feature_col].clone(),
            threshold,
        ));
    }
    Ok((left, right))
}
