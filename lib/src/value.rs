//! Heterogeneous sequence elements and boundary coercion.
//!
//! Cleaning and structural transforms operate on sequences that freely mix
//! numbers, strings, and absent entries. [`Value`] models a single element of
//! such a sequence as a closed variant type, so every transform handles each
//! kind of element exhaustively.
//!
//! This module also owns the two conversions that happen at the edge of the
//! library, before any transform runs:
//!
//! - [`Value::from_token`] / [`parse_list`]: the "smart cast" from raw input
//!   tokens to typed values, with an explicit, ordered rule list.
//! - [`numeric_values`]: validation of a heterogeneous sequence into a plain
//!   `Vec<f64>` for the numeric transforms, which themselves perform no
//!   coercion.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// A single element of a heterogeneous sequence.
///
/// Serializes untagged, so a JSON array like `[1, 2.5, "x", null]` maps
/// directly onto `Int`, `Float`, `Text`, and `Missing`.
///
/// # Example
/// ```rust
/// use prepkit::Value;
///
/// assert!(Value::Missing.is_missing());
/// assert!(Value::Text(String::new()).is_missing());
/// assert!(Value::Float(f64::NAN).is_missing());
/// assert!(!Value::Int(0).is_missing());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absent marker (JSON `null`, input token `none`).
    Missing,
    /// A signed integer.
    Int(i64),
    /// A double-precision float. NaN is a valid payload and counts as missing.
    Float(f64),
    /// An arbitrary string. The empty string counts as missing.
    Text(String),
}

impl Value {
    /// Returns true when this value counts as missing.
    ///
    /// A value is missing iff it is the absent marker, the empty string, or
    /// a float NaN. Integer zero, `0.0`, and whitespace-only strings are not
    /// missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Int(_) => false,
            Value::Float(x) => x.is_nan(),
            Value::Text(s) => s.is_empty(),
        }
    }

    /// Interprets this value as a float, if it has a numeric reading.
    ///
    /// Integers convert exactly, floats pass through unchanged (including
    /// NaN), and text is parsed after trimming surrounding whitespace.
    /// Returns `None` for the absent marker and for unparseable text.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Missing => None,
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Casts a raw input token to its most specific value.
    ///
    /// The rules apply in order to the whitespace-trimmed token:
    ///
    /// 1. `none` (any case) becomes the absent marker.
    /// 2. `nan` (any case) becomes a float NaN.
    /// 3. The empty token, `""`, and `''` become the empty string.
    /// 4. An integer parse wins over a float parse.
    /// 5. Anything else stays text.
    ///
    /// # Example
    /// ```rust
    /// use prepkit::Value;
    ///
    /// assert_eq!(Value::from_token("42"), Value::Int(42));
    /// assert_eq!(Value::from_token("2.5"), Value::Float(2.5));
    /// assert_eq!(Value::from_token("None"), Value::Missing);
    /// assert_eq!(Value::from_token("hello"), Value::Text("hello".into()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        let tok = token.trim();
        if tok.eq_ignore_ascii_case("none") {
            return Value::Missing;
        }
        if tok.eq_ignore_ascii_case("nan") {
            return Value::Float(f64::NAN);
        }
        if tok.is_empty() || tok == "\"\"" || tok == "''" {
            return Value::Text(String::new());
        }
        if let Ok(i) = tok.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(x) = tok.parse::<f64>() {
            return Value::Float(x);
        }
        Value::Text(tok.to_string())
    }
}

/// Splits a comma-separated line into smart-cast values.
///
/// Every comma delimits a token, so `"1,,3"` yields an empty string in the
/// middle and a bare `""` yields a single empty string.
pub fn parse_list(input: &str) -> Vec<Value> {
    input.split(',').map(Value::from_token).collect()
}

/// Validates a heterogeneous sequence into finite floats.
///
/// This is the boundary in front of the numeric transforms: integers and
/// finite floats convert directly, text is accepted when it parses as a
/// finite number, everything else is rejected. The numeric transforms assume
/// this validation has already happened.
///
/// # Errors
/// [`TransformError::NonNumeric`] for elements with no numeric reading,
/// [`TransformError::NonFinite`] for NaN or infinite floats.
pub fn numeric_values(values: &[Value]) -> Result<Vec<f64>, TransformError> {
    values
        .iter()
        .enumerate()
        .map(|(position, v)| {
            let x = v.to_f64().ok_or_else(|| TransformError::NonNumeric {
                position,
                token: v.to_string(),
            })?;
            if !x.is_finite() {
                return Err(TransformError::NonFinite { position, value: x });
            }
            Ok(x)
        })
        .collect()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.write_str("None"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

// Equality and hashing are by variant, with floats keyed on their IEEE-754
// bit pattern. NaN therefore equals NaN for membership purposes, and
// Int(1) does not equal Float(1.0).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Missing, Value::Missing) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Missing => {}
            Value::Int(i) => i.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_predicate() {
        assert!(Value::Missing.is_missing());
        assert!(Value::Text(String::new()).is_missing());
        assert!(Value::Float(f64::NAN).is_missing());
    }

    #[test]
    fn test_missing_predicate_rejects_falsy_values() {
        assert!(!Value::Int(0).is_missing());
        assert!(!Value::Float(0.0).is_missing());
        assert!(!Value::Text("   ".to_string()).is_missing());
        assert!(!Value::Text("false".to_string()).is_missing());
    }

    #[test]
    fn test_from_token_special_tokens() {
        assert_eq!(Value::from_token("none"), Value::Missing);
        assert_eq!(Value::from_token("None"), Value::Missing);
        assert_eq!(Value::from_token("NONE"), Value::Missing);
        assert!(matches!(Value::from_token("nan"), Value::Float(x) if x.is_nan()));
        assert!(matches!(Value::from_token("NaN"), Value::Float(x) if x.is_nan()));
    }

    #[test]
    fn test_from_token_empty_forms() {
        assert_eq!(Value::from_token(""), Value::Text(String::new()));
        assert_eq!(Value::from_token("\"\""), Value::Text(String::new()));
        assert_eq!(Value::from_token("''"), Value::Text(String::new()));
        assert_eq!(Value::from_token("   "), Value::Text(String::new()));
    }

    #[test]
    fn test_from_token_numeric_order() {
        // Integer parse is attempted before float parse.
        assert_eq!(Value::from_token("7"), Value::Int(7));
        assert_eq!(Value::from_token("-7"), Value::Int(-7));
        assert_eq!(Value::from_token("7.0"), Value::Float(7.0));
        assert_eq!(Value::from_token("1e3"), Value::Float(1000.0));
    }

    #[test]
    fn test_from_token_trims_whitespace() {
        assert_eq!(Value::from_token("  42 "), Value::Int(42));
        assert_eq!(Value::from_token(" hello "), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_from_token_fallback_to_text() {
        assert_eq!(Value::from_token("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::from_token("1.2.3"), Value::Text("1.2.3".to_string()));
    }

    #[test]
    fn test_parse_list_mixed() {
        let parsed = parse_list("1,2.5,none,hello,,nan");
        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[0], Value::Int(1));
        assert_eq!(parsed[1], Value::Float(2.5));
        assert_eq!(parsed[2], Value::Missing);
        assert_eq!(parsed[3], Value::Text("hello".to_string()));
        assert_eq!(parsed[4], Value::Text(String::new()));
        assert!(matches!(parsed[5], Value::Float(x) if x.is_nan()));
    }

    #[test]
    fn test_numeric_values_accepts_numeric_text() {
        let values = vec![
            Value::Int(1),
            Value::Float(2.5),
            Value::Text("3.5".to_string()),
        ];
        assert_eq!(numeric_values(&values).unwrap(), vec![1.0, 2.5, 3.5]);
    }

    #[test]
    fn test_numeric_values_rejects_text() {
        let values = vec![Value::Int(1), Value::Text("hello".to_string())];
        let err = numeric_values(&values).unwrap_err();
        assert!(matches!(
            err,
            TransformError::NonNumeric { position: 1, .. }
        ));
    }

    #[test]
    fn test_numeric_values_rejects_missing_and_nan() {
        let err = numeric_values(&[Value::Missing]).unwrap_err();
        assert!(matches!(err, TransformError::NonNumeric { position: 0, .. }));

        let err = numeric_values(&[Value::Float(f64::NAN)]).unwrap_err();
        assert!(matches!(err, TransformError::NonFinite { position: 0, .. }));
    }

    #[test]
    fn test_equality_is_variant_aware() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Text("1".to_string()), Value::Int(1));
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Missing.to_string(), "None");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3_i64), Value::Int(3));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::from("abc".to_string()), Value::Text("abc".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let values: Vec<Value> = serde_json::from_str(r#"[1, 2.5, "x", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::Text("x".to_string()),
                Value::Missing,
            ]
        );

        let encoded = serde_json::to_string(&values).unwrap();
        assert_eq!(encoded, r#"[1,2.5,"x",null]"#);
    }
}
