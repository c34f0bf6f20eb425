//! Command-line argument definitions.

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "prepkit",
    version,
    about = "Command-line data preprocessing toolkit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported command groups.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Data cleaning commands.
    #[command(subcommand)]
    Clean(CleanCommands),
    /// Numerical processing commands.
    #[command(subcommand)]
    Numeric(NumericCommands),
    /// Text processing commands.
    #[command(subcommand)]
    Text(TextCommands),
    /// Data structure commands.
    #[command(subcommand)]
    Struct(StructCommands),
}

#[derive(Debug, Subcommand)]
pub enum CleanCommands {
    /// Remove missing values (none, '', nan) from a list.
    RemoveMissing {
        /// Comma-separated input values.
        values: String,
    },
    /// Fill missing values with a replacement value.
    FillMissing {
        /// Comma-separated input values.
        values: String,
        /// Replacement for missing items, itself smart-cast (e.g. "0", "none", "x").
        #[arg(long, default_value = "0")]
        fill_value: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum NumericCommands {
    /// Normalize values into a [min, max] range.
    Normalize {
        /// Comma-separated numeric values.
        values: String,
        /// New minimum value.
        #[arg(long = "min", default_value_t = 0.0)]
        new_min: f64,
        /// New maximum value.
        #[arg(long = "max", default_value_t = 1.0)]
        new_max: f64,
    },
    /// Standardize values using the z-score.
    Standardize {
        /// Comma-separated numeric values.
        values: String,
    },
    /// Clip values into a [min, max] range.
    Clip {
        /// Comma-separated numeric values.
        values: String,
        /// Minimum value to clip to.
        #[arg(long = "min", default_value_t = 0.0)]
        min_val: f64,
        /// Maximum value to clip to.
        #[arg(long = "max", default_value_t = 1.0)]
        max_val: f64,
    },
    /// Convert values to integers, skipping non-numeric entries.
    ToInt {
        /// Comma-separated input values.
        values: String,
    },
    /// Transform values to natural-log scale, skipping non-positive entries.
    LogTransform {
        /// Comma-separated numeric values.
        values: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum TextCommands {
    /// Tokenize text into lowercase alphanumeric words.
    Tokenize {
        /// Input text.
        input: String,
    },
    /// Remove all characters except ASCII letters, digits, and spaces.
    RemovePunctuation {
        /// Input text.
        input: String,
    },
    /// Remove stop-words from text (case-insensitive).
    RemoveStopwords {
        /// Input text.
        input: String,
        /// Comma-separated stop-words to remove (e.g. "is,a,the").
        #[arg(long)]
        stopwords: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum StructCommands {
    /// Remove duplicate values, preserving first-occurrence order.
    UniqueValues {
        /// Comma-separated input values.
        values: String,
    },
    /// Flatten a JSON list of lists into a single list.
    Flatten {
        /// JSON input, e.g. '[[1,2],[3,4]]'.
        values: String,
    },
    /// Randomly shuffle a list of values.
    Shuffle {
        /// Comma-separated input values.
        values: String,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },
}
