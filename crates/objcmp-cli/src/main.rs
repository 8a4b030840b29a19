//! `objcmp` CLI — compare two JSON documents key by key.
//!
//! ## Usage
//!
//! ```sh
//! # Classify top-level keys as omitted / added / shared / altered
//! objcmp diff before.json after.json
//!
//! # Read one side from stdin
//! cat after.json | objcmp diff before.json -
//!
//! # Compare two text files character by character
//! objcmp diff --raw-strings old.txt new.txt
//!
//! # Only print the relation counts
//! objcmp diff --summary before.json after.json
//!
//! # Structural equality check (exit code 1 when not equal)
//! objcmp eq before.json after.json
//! ```
//!
//! Errors exit with code 2, like `cmp` and `diff`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use objcmp_core::{DiffOptions, Relation, Value};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "objcmp",
    version,
    about = "Structural comparison of JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log classification details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the keys of SOURCE and TARGET into omitted, added, shared, and altered
    Diff {
        /// Source JSON file, or `-` for stdin
        source: String,
        /// Target JSON file, or `-` for stdin
        target: String,
        /// Print only the number of keys in each relation
        #[arg(long)]
        summary: bool,
        /// Emit compact JSON instead of pretty-printed JSON
        #[arg(long, conflicts_with = "summary")]
        compact: bool,
        /// Walk prototype chains (no effect on plain JSON, which has none)
        #[arg(long)]
        include_inherited: bool,
        /// Include non-enumerable keys such as an array's `length`
        #[arg(long)]
        include_non_enumerable: bool,
        /// Compare operands that are not valid JSON as plain strings
        #[arg(long)]
        raw_strings: bool,
    },
    /// Check whether A and B are structurally equal (exit code 1 if not)
    Eq {
        /// First JSON file, or `-` for stdin
        a: String,
        /// Second JSON file, or `-` for stdin
        b: String,
    },
}

/// Exit status for `eq` when the operands differ.
const EXIT_DIFFERENT: u8 = 1;
/// Exit status for any failure, matching clap's usage errors.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Diff {
            source,
            target,
            summary,
            compact,
            include_inherited,
            include_non_enumerable,
            raw_strings,
        } => {
            check_single_stdin(&source, &target)?;
            let source_value = load_operand(&source, raw_strings)?;
            let target_value = load_operand(&target, raw_strings)?;

            let options = DiffOptions::default()
                .own_properties_only(!include_inherited)
                .enumerable_only(!include_non_enumerable);
            let result = objcmp_core::diff(&source_value, &target_value, &options)
                .context("Failed to compare source and target")?;

            if summary {
                for relation in Relation::ALL {
                    println!("{}: {}", relation, result.count(relation));
                }
            } else if compact {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Commands::Eq { a, b } => {
            check_single_stdin(&a, &b)?;
            let a_value = load_operand(&a, false)?;
            let b_value = load_operand(&b, false)?;
            if objcmp_core::is_equal(&a_value, &b_value) {
                println!("equal");
            } else {
                println!("not equal");
                return Ok(ExitCode::from(EXIT_DIFFERENT));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Install a stderr `fmt` subscriber. `--verbose` raises the default filter
/// from `warn` to `debug`; `RUST_LOG` wins over both.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "objcmp_core=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn check_single_stdin(a: &str, b: &str) -> Result<()> {
    if a == "-" && b == "-" {
        bail!("Only one operand can be read from stdin");
    }
    Ok(())
}

/// Read an operand and classify it into a `Value`.
///
/// With `raw_strings`, input that is not valid JSON is compared as a plain
/// string, which diffs character by character.
fn load_operand(path: &str, raw_strings: bool) -> Result<Value> {
    let text = read_input(path)?;
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => {
            debug!(path, "parsed operand as JSON");
            Ok(Value::from(json))
        }
        Err(_) if raw_strings => {
            debug!(path, "treating operand as a raw string");
            Ok(Value::String(text.trim_end_matches(['\n', '\r']).to_string()))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to parse JSON from {}", describe(path))),
    }
}

fn describe(path: &str) -> String {
    if path == "-" {
        "stdin".to_string()
    } else {
        format!("file: {}", path)
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}
