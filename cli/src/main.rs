//! Thin command-line adapter over the `prepkit` transform library.
//!
//! Each subcommand parses its raw input (comma-separated tokens, or JSON for
//! nested lists), invokes the matching library function, and prints the
//! result as a single human-readable line on stdout. Parse and validation
//! failures go to stderr with a non-zero exit code; the library itself never
//! prints or exits.

use std::collections::HashSet;
use std::fmt::Display;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use prepkit::value::{self, Value};
use prepkit::{
    clip_values, convert_to_integers, fill_missing, flatten_one_level, normalize_min_max,
    remove_missing, remove_stop_words, shuffle, standardize_z_score, strip_non_alphanumeric,
    tokenize, transform_log_scale, unique_preserve_order,
};

mod cli;

use cli::{CleanCommands, Cli, Commands, NumericCommands, StructCommands, TextCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli.command)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Clean(cmd) => run_clean(cmd),
        Commands::Numeric(cmd) => run_numeric(cmd),
        Commands::Text(cmd) => run_text(cmd),
        Commands::Struct(cmd) => run_struct(cmd),
    }
}

fn run_clean(command: CleanCommands) -> Result<()> {
    match command {
        CleanCommands::RemoveMissing { values } => {
            let parsed = value::parse_list(&values);
            debug!(input = parsed.len(), "remove-missing");
            println!("{}", format_list(&remove_missing(&parsed)));
        }
        CleanCommands::FillMissing { values, fill_value } => {
            let parsed = value::parse_list(&values);
            let fill = Value::from_token(&fill_value);
            debug!(input = parsed.len(), fill = %fill, "fill-missing");
            println!("{}", format_list(&fill_missing(&parsed, &fill)));
        }
    }
    Ok(())
}

fn run_numeric(command: NumericCommands) -> Result<()> {
    match command {
        NumericCommands::Normalize {
            values,
            new_min,
            new_max,
        } => {
            let nums = numeric_input(&values)?;
            println!("{}", format_list(&normalize_min_max(&nums, new_min, new_max)));
        }
        NumericCommands::Standardize { values } => {
            let nums = numeric_input(&values)?;
            println!("{}", format_list(&standardize_z_score(&nums)));
        }
        NumericCommands::Clip {
            values,
            min_val,
            max_val,
        } => {
            let nums = numeric_input(&values)?;
            println!("{}", format_list(&clip_values(&nums, min_val, max_val)));
        }
        NumericCommands::ToInt { values } => {
            // Non-numeric entries are skipped by the transform itself, so
            // the input is not validated here.
            let parsed = value::parse_list(&values);
            println!("{}", format_list(&convert_to_integers(&parsed)));
        }
        NumericCommands::LogTransform { values } => {
            let nums = numeric_input(&values)?;
            println!("{}", format_list(&transform_log_scale(&nums)));
        }
    }
    Ok(())
}

fn run_text(command: TextCommands) -> Result<()> {
    match command {
        TextCommands::Tokenize { input } => println!("{}", tokenize(&input)),
        TextCommands::RemovePunctuation { input } => {
            println!("{}", strip_non_alphanumeric(&input));
        }
        TextCommands::RemoveStopwords { input, stopwords } => {
            let stop_words = stop_word_set(stopwords.as_deref());
            debug!(stop_words = stop_words.len(), "remove-stopwords");
            println!("{}", remove_stop_words(&input, &stop_words));
        }
    }
    Ok(())
}

fn run_struct(command: StructCommands) -> Result<()> {
    match command {
        StructCommands::UniqueValues { values } => {
            let parsed = value::parse_list(&values);
            println!("{}", format_list(&unique_preserve_order(&parsed)));
        }
        StructCommands::Flatten { values } => {
            let nested: Vec<Vec<Value>> = serde_json::from_str(&values)
                .context("input must be a JSON list of lists, e.g. '[[1,2],[3,4]]'")?;
            println!("{}", format_list(&flatten_one_level(&nested)));
        }
        StructCommands::Shuffle { values, seed } => {
            let parsed = value::parse_list(&values);
            debug!(input = parsed.len(), ?seed, "shuffle");
            println!("{}", format_list(&shuffle(&parsed, seed)));
        }
    }
    Ok(())
}

/// Parses a comma-separated line and validates every entry as numeric.
fn numeric_input(raw: &str) -> Result<Vec<f64>> {
    let parsed = value::parse_list(raw);
    value::numeric_values(&parsed)
        .with_context(|| format!("all values must be numeric, received: {raw:?}"))
}

/// Builds the lowercase stop-word set from a comma-separated option.
fn stop_word_set(raw: Option<&str>) -> HashSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Formats a result sequence as one `[a, b, c]` line.
fn format_list<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
