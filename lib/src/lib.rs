//! # prepkit
//!
//! Stateless data-preprocessing transforms: cleaning, numeric scaling, text
//! normalization, and list-structure utilities.
//!
//! ## Core Design Principles
//!
//! - **Pure functions**: every transform takes a borrowed input and returns
//!   a freshly allocated output; inputs are never mutated and no global
//!   state exists, so concurrent callers need no coordination.
//! - **Closed element type**: heterogeneous sequences are `Vec<Value>` over
//!   a tagged union (Missing / Int / Float / Text), giving exhaustive,
//!   compiler-checked handling of missing-value policy.
//! - **Validation at the boundary**: numeric transforms take plain `&[f64]`
//!   and never coerce; [`value::numeric_values`] converts or rejects a
//!   heterogeneous sequence up front.
//! - **Degenerate inputs are outputs, not errors**: empty sequences, zero
//!   ranges, and zero variance all have documented fallback results.
//!
//! ## Quick Start
//!
//! ```rust
//! use prepkit::{normalize_min_max, remove_missing, Value};
//!
//! let raw = vec![Value::Int(10), Value::Missing, Value::Float(30.0)];
//! let kept = remove_missing(&raw);
//! assert_eq!(kept.len(), 2);
//!
//! let scaled = normalize_min_max(&[10.0, 20.0, 30.0], 0.0, 1.0);
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//! ```
//!
//! ## Module Structure
//!
//! - `value` — the heterogeneous element type, smart token coercion, and
//!   numeric boundary validation
//! - `cleaning` — missing-value removal and filling
//! - `numeric` — min-max normalization, z-score standardization, clipping,
//!   integer conversion, log scaling
//! - `text` — tokenization, punctuation stripping, stop-word removal
//! - `structure` — order-preserving deduplication, one-level flattening,
//!   seeded shuffling
//! - `error` — boundary validation errors

pub mod cleaning;
pub mod error;
pub mod numeric;
pub mod structure;
pub mod text;
pub mod value;

pub use cleaning::{fill_missing, remove_missing};
pub use error::TransformError;
pub use numeric::{
    clip_values, convert_to_integers, normalize_min_max, standardize_z_score, transform_log_scale,
};
pub use structure::{flatten_one_level, shuffle, unique_preserve_order};
pub use text::{remove_stop_words, strip_non_alphanumeric, tokenize};
pub use value::Value;
