/// Fraction of predictions that land within `tolerance` of the expected
/// value.
pub fn accuracy(y: &[f64], yhat: &[f64], tolerance: f64) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let hits = y
        .iter()
        .zip(yhat)
        .filter(|(y_, yhat_)| (**y_ - **yhat_).abs() < tolerance)
        .count();
    hits as f64 / y.len() as f64
}

/// Root of the mean squared difference between expected and predicted.
pub fn root_mean_squared_error(y: &[f64], yhat: &[f64]) -> f64 {
    let res = y
        .iter()
        .zip(yhat)
        .map(|(y_, yhat_)| (y_ - yhat_).powi(2))
        .sum::<f64>();
    (res / y.len() as f64).sqrt()
}
