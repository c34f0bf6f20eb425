//! End-to-end preprocessing walkthrough.
//!
//! This example takes one messy, mixed-type column through the full set of
//! transform groups:
//! - Missing-value cleaning (remove and fill)
//! - Numeric scaling (min-max, z-score, clipping)
//! - Text normalization (tokenize, strip, stop-words)
//! - Structural operations (dedup, flatten, seeded shuffle)
//!
//! Run with: cargo run --example clean_and_scale

use std::collections::HashSet;
use std::error::Error;

use prepkit::{
    clip_values, fill_missing, flatten_one_level, normalize_min_max, remove_missing,
    remove_stop_words, shuffle, standardize_z_score, tokenize, unique_preserve_order, value, Value,
};

fn main() -> Result<(), Box<dyn Error>> {
    // A survey column as it might arrive from a CSV export: numbers mixed
    // with blanks, absent markers, and stray text.
    let raw = vec![
        Value::Int(12),
        Value::Missing,
        Value::Float(18.5),
        Value::Text(String::new()),
        Value::Float(f64::NAN),
        Value::Text("21".to_string()),
        Value::Int(30),
    ];
    println!("raw column:      {raw:?}");

    let cleaned = remove_missing(&raw);
    println!("without missing: {cleaned:?}");

    let filled = fill_missing(&raw, &Value::Int(0));
    println!("zero-filled:     {filled:?}");

    // Validate the cleaned column at the numeric boundary, then scale it.
    let nums = value::numeric_values(&cleaned)?;
    println!("as floats:       {nums:?}");
    println!("min-max [0, 1]:  {:?}", normalize_min_max(&nums, 0.0, 1.0));
    println!("z-scores:        {:?}", standardize_z_score(&nums));
    println!("clipped [15,25]: {:?}", clip_values(&nums, 15.0, 25.0));

    // Free-text field from the same survey.
    let comment = "Great product!!! Would buy again... 10/10";
    let stop_words: HashSet<String> =
        ["would", "again"].iter().map(|w| w.to_string()).collect();
    println!("tokens:          {}", tokenize(comment));
    println!(
        "no stop-words:   {}",
        remove_stop_words(&tokenize(comment), &stop_words)
    );

    // Structural cleanup over repeated category labels from several batches.
    let batches = vec![
        vec![Value::Text("red".to_string()), Value::Text("blue".to_string())],
        vec![Value::Text("red".to_string()), Value::Text("green".to_string())],
    ];
    let labels = flatten_one_level(&batches);
    let distinct = unique_preserve_order(&labels);
    println!("distinct labels: {distinct:?}");
    println!("shuffled (seed): {:?}", shuffle(&distinct, Some(42)));

    Ok(())
}
