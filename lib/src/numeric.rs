//! Numeric transforms over sequences of finite floats.
//!
//! Min-max normalization rescales linearly:
//! ```text
//! x_scaled = new_min + (x - x_min) * (new_max - new_min) / (x_max - x_min)
//! ```
//!
//! Z-score standardization centers on the mean and divides by the sample
//! (Bessel-corrected) standard deviation.
//!
//! Callers are expected to validate their input through
//! [`crate::value::numeric_values`] first; these functions perform no
//! coercion. Degenerate inputs (empty, zero range, zero variance) have
//! defined fallback outputs rather than errors.

use crate::value::Value;

/// Rescales values so the observed minimum maps to `new_min` and the
/// observed maximum maps to `new_max`.
///
/// An empty input yields an empty output. When every value is equal the
/// observed range is zero and the result is `new_min` repeated, avoiding a
/// division by zero.
///
/// # Example
/// ```rust
/// use prepkit::normalize_min_max;
///
/// let scaled = normalize_min_max(&[10.0, 20.0, 30.0, 40.0, 50.0], 0.0, 1.0);
/// assert_eq!(scaled, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn normalize_min_max(values: &[f64], new_min: f64, new_max: f64) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_val - min_val;

    if range == 0.0 {
        return vec![new_min; values.len()];
    }

    let new_range = new_max - new_min;
    values
        .iter()
        .map(|v| new_min + (v - min_val) * new_range / range)
        .collect()
}

/// Standardizes values to zero mean and unit sample standard deviation.
///
/// The deviation uses the n - 1 denominator, so fewer than two elements
/// leave it undefined and the result is all zeros. A zero deviation (every
/// value equal) also yields all zeros.
pub fn standardize_z_score(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64;
    let stdev = variance.sqrt();

    if stdev == 0.0 {
        return vec![0.0; n];
    }

    values.iter().map(|v| (v - mean) / stdev).collect()
}

/// Clamps every value into `[min_val, max_val]`.
///
/// The bounds are not validated. The upper bound is applied before the
/// lower bound, so an inverted range (`min_val > max_val`) maps every
/// element to `min_val`; callers wanting sane output should pass
/// `min_val <= max_val`.
///
/// # Example
/// ```rust
/// use prepkit::clip_values;
///
/// let clipped = clip_values(&[1.0, 5.0, 10.0, 15.0, 20.0], 5.0, 15.0);
/// assert_eq!(clipped, vec![5.0, 5.0, 10.0, 15.0, 15.0]);
/// ```
pub fn clip_values(values: &[f64], min_val: f64, max_val: f64) -> Vec<f64> {
    values.iter().map(|v| v.min(max_val).max(min_val)).collect()
}

/// Converts elements to integers, truncating toward zero.
///
/// Each element is first read as a float (integers directly, text via a
/// float parse) and then truncated. Elements with no finite numeric reading
/// are silently skipped, so the output may be shorter than the input.
///
/// # Example
/// ```rust
/// use prepkit::{convert_to_integers, Value};
///
/// let values: Vec<Value> = ["1", "2.5", "hello", "3.0", "4.9"]
///     .iter()
///     .map(|s| Value::Text(s.to_string()))
///     .collect();
/// assert_eq!(convert_to_integers(&values), vec![1, 2, 3, 4]);
/// ```
pub fn convert_to_integers(values: &[Value]) -> Vec<i64> {
    values
        .iter()
        .filter_map(Value::to_f64)
        .filter(|x| x.is_finite())
        .map(|x| x.trunc() as i64)
        .collect()
}

/// Maps each strictly-positive value to its natural logarithm.
///
/// Non-positive values are silently skipped, so the output may be shorter
/// than the input.
pub fn transform_log_scale(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .filter(|&&v| v > 0.0)
        .map(|v| v.ln())
        .collect()
}
