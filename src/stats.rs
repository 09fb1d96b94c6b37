use crate::data::Dataset;
use crate::errors::TreeError;

/// Pearson correlation coefficient between two columns.
///
/// A column with no variance has no defined correlation, which surfaces as
/// [`TreeError::DegenerateColumn`] naming the offending column.
///
/// * `data` - The dataset to read from.
/// * `feature_col` - Index of the feature column.
/// * `target_col` - Index of the target column.
pub fn correlation(data: &Dataset, feature_col: usize, target_col: usize) -> Result<f64, TreeError> {
    let n = data.n_records();
    if n == 0 {
        return Err(TreeError::EmptyDataset);
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for i in 0..n {
        let x = data.numeric(i, feature_col)?;
        let y = data.numeric(i, target_col)?;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }
    let n = n as f64;
    let var_x = n * sum_x2 - sum_x * sum_x;
    let var_y = n * sum_y2 - sum_y * sum_y;
    // Cancellation can push a constant column slightly below zero.
    if var_x <= 0.0 {
        return Err(TreeError::DegenerateColumn(feature_col));
    }
    if var_y <= 0.0 {
        return Err(TreeError::DegenerateColumn(target_col));
    }
    Ok((n * sum_xy - sum_x * sum_y) / (var_x * var_y).sqrt())
}

/// Arithmetic mean of a column.
pub fn mean(data: &Dataset, col: usize) -> Result<f64, TreeError> {
    let n = data.n_records();
    if n == 0 {
        return Err(TreeError::EmptyDataset);
    }
    let mut total = 0.0;
    for i in 0..n {
        total += data.numeric(i, col)?;
    }
    Ok(total / n as f64)
}

/// Median of a column.
///
/// The middle value once sorted, or the average of the two middle values when
/// the record count is even.
pub fn median(data: &Dataset, col: usize) -> Result<f64, TreeError> {
    let n = data.n_records();
    if n == 0 {
        return Err(TreeError::EmptyDataset);
    }
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        values.push(data.numeric(i, col)?);
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}
