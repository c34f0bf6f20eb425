//! Missing-value cleaning.
//!
//! Both operations share one missing-detection predicate,
//! [`Value::is_missing`]: a value is missing when it is the absent marker,
//! the empty string, or a float NaN. Nothing else qualifies, so integer zero
//! and whitespace-only strings always survive.

use crate::value::Value;

/// Removes missing values from a sequence.
///
/// Returns a new sequence containing the surviving elements in their
/// original order. The input is left untouched.
///
/// # Example
/// ```rust
/// use prepkit::{remove_missing, Value};
///
/// let raw = vec![Value::Int(1), Value::Missing, Value::Text("x".into())];
/// let kept = remove_missing(&raw);
/// assert_eq!(kept, vec![Value::Int(1), Value::Text("x".into())]);
/// ```
pub fn remove_missing(values: &[Value]) -> Vec<Value> {
    values.iter().filter(|v| !v.is_missing()).cloned().collect()
}

/// Replaces every missing value with a clone of `fill`.
///
/// The replacement itself is not validated and may be any value, including
/// another missing marker. Output length always equals input length.
pub fn fill_missing(values: &[Value], fill: &Value) -> Vec<Value> {
    values
        .iter()
        .map(|v| if v.is_missing() { fill.clone() } else { v.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messy() -> Vec<Value> {
        vec![
            Value::Int(1),
            Value::Missing,
            Value::Text(String::new()),
            Value::Float(f64::NAN),
            Value::Text("keep".to_string()),
            Value::Int(0),
        ]
    }

    #[test]
    fn test_remove_missing_drops_all_missing_kinds() {
        let cleaned = remove_missing(&messy());
        assert_eq!(
            cleaned,
            vec![
                Value::Int(1),
                Value::Text("keep".to_string()),
                Value::Int(0),
            ]
        );
    }

    #[test]
    fn test_remove_missing_keeps_whitespace_text() {
        let values = vec![Value::Text(" ".to_string()), Value::Missing];
        assert_eq!(remove_missing(&values), vec![Value::Text(" ".to_string())]);
    }

    #[test]
    fn test_remove_missing_empty_input() {
        assert!(remove_missing(&[]).is_empty());
    }

    #[test]
    fn test_fill_missing_preserves_length() {
        let values = messy();
        let filled = fill_missing(&values, &Value::Int(0));
        assert_eq!(filled.len(), values.len());
        assert!(filled.iter().all(|v| !v.is_missing()));
    }

    #[test]
    fn test_fill_missing_replaces_in_place() {
        let values = vec![Value::Int(1), Value::Missing, Value::Int(3)];
        let filled = fill_missing(&values, &Value::Text("?".to_string()));
        assert_eq!(
            filled,
            vec![
                Value::Int(1),
                Value::Text("?".to_string()),
                Value::Int(3),
            ]
        );
    }

    #[test]
    fn test_fill_missing_allows_missing_fill() {
        let values = vec![Value::Missing];
        let filled = fill_missing(&values, &Value::Missing);
        assert_eq!(filled, vec![Value::Missing]);
    }

    #[test]
    fn test_fill_then_remove_drops_exactly_the_filled_positions() {
        // With a non-missing fill, removal after filling keeps every slot.
        let values = messy();
        let filled = fill_missing(&values, &Value::Int(-1));
        assert_eq!(remove_missing(&filled).len(), values.len());

        // Removal alone drops exactly the positions the fill would touch.
        let missing_count = values.iter().filter(|v| v.is_missing()).count();
        assert_eq!(remove_missing(&values).len(), values.len() - missing_count);
    }
}
