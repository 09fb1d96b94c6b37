pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const SCORE_TOLERANCE: f64 = 1e-6;
pub const ACCURACY_TOLERANCE: f64 = 0.1;
