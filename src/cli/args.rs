//! Command line argument parsing for Orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Orthos - a BK-tree based spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "A BK-tree based spell checker for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Orthos Contributors")]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell check a text file against a dictionary
    Check(CheckArgs),

    /// Suggest corrections for a single word
    Suggest(SuggestArgs),

    /// Look up a word in a dictionary
    Lookup(LookupArgs),
}

/// Arguments for spell checking a file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Path to the text file to check
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Maximum number of suggestions per flagged word
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    /// Also flag capitalized words that are not at a sentence start
    #[arg(long)]
    pub include_proper_nouns: bool,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to find corrections for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    /// Largest edit distance to search
    #[arg(long)]
    pub max_radius: Option<usize>,
}

/// Arguments for dictionary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
