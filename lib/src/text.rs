//! Text normalization transforms.
//!
//! All three operations are ASCII-alphanumeric-aware and case-insensitive
//! where they lowercase; none of them attempts any Unicode-aware word
//! segmentation. Patterns are pre-compiled into statics.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercases text and reduces it to space-joined word tokens.
///
/// A token is a maximal run of ASCII letters, digits, or underscores;
/// everything between tokens is discarded, so punctuation-only fragments
/// vanish entirely.
///
/// # Example
/// ```rust
/// use prepkit::tokenize;
///
/// assert_eq!(
///     tokenize("Hello world! This is 1 test."),
///     "hello world this is 1 test"
/// );
/// ```
pub fn tokenize(text: &str) -> String {
    static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9_]+").unwrap());

    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes every character that is not an ASCII letter, digit, or space.
///
/// Case is preserved, and runs of spaces left behind by removed characters
/// are preserved too.
///
/// # Example
/// ```rust
/// use prepkit::strip_non_alphanumeric;
///
/// assert_eq!(
///     strip_non_alphanumeric("Hello, world! (v2.0)"),
///     "Hello world v20"
/// );
/// ```
pub fn strip_non_alphanumeric(text: &str) -> String {
    static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9 ]").unwrap());

    NON_ALNUM_RE.replace_all(text, "").into_owned()
}

/// Lowercases text, drops stop-words, and rejoins with single spaces.
///
/// Words are whitespace-delimited and compared exactly against the set, so
/// the set should hold lowercase entries and attached punctuation keeps a
/// word from matching (`"test."` is not `"test"`).
pub fn remove_stop_words(text: &str, stop_words: &HashSet<String>) -> String {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| !stop_words.contains(*word))
        .collect::<Vec<_>>()
        .join(" ")
}
