//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::checker::report::Misspelling;
use crate::cli::args::{OrthosArgs, OutputFormat};
use crate::error::Result;

/// Result structure for spell check runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub file: String,
    pub words_flagged: usize,
    pub misspellings: Vec<Misspelling>,
}

/// Result structure for single-word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Result structure for dictionary lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &OrthosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &OrthosArgs) -> Result<()> {
    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("CheckReport") => {
            output_check_report_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("SuggestResult") => {
            output_suggest_result_human(&value)
        }
        _ if std::any::type_name::<T>().contains("LookupResult") => {
            output_lookup_result_human(&value)
        }
        _ => {
            // Generic output for other types
            if args.verbosity() > 0 {
                println!("{message}");
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

fn output_check_report_human(value: &serde_json::Value, args: &OrthosArgs) -> Result<()> {
    let misspellings = value["misspellings"].as_array().cloned().unwrap_or_default();

    for entry in &misspellings {
        let word = entry["word"].as_str().unwrap_or_default();
        let line = entry["line"].as_u64().unwrap_or_default();
        let column = entry["column"].as_u64().unwrap_or_default();
        let context = entry["context"].as_str().unwrap_or_default();
        let suggestions: Vec<&str> = entry["suggestions"]
            .as_array()
            .map(|s| s.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        println!("Line {line}, Column {column}: '{word}' is not a word");
        println!("\tContext: \"{context}\"");
        if suggestions.is_empty() {
            println!("\tSuggestions: (none)");
        } else {
            println!("\tSuggestions: {}", suggestions.join(", "));
        }
        println!();
    }

    if args.verbosity() > 0 {
        let file = value["file"].as_str().unwrap_or_default();
        let flagged = value["words_flagged"].as_u64().unwrap_or_default();
        if flagged == 0 {
            println!("{file}: no misspellings found");
        } else {
            println!("{file}: {flagged} word(s) flagged");
        }
    }

    Ok(())
}

fn output_suggest_result_human(value: &serde_json::Value) -> Result<()> {
    let word = value["word"].as_str().unwrap_or_default();
    let suggestions: Vec<&str> = value["suggestions"]
        .as_array()
        .map(|s| s.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    if suggestions.is_empty() {
        println!("No suggestions for '{word}'");
    } else {
        println!("Suggestions for '{word}': {}", suggestions.join(", "));
    }

    Ok(())
}

fn output_lookup_result_human(value: &serde_json::Value) -> Result<()> {
    let word = value["word"].as_str().unwrap_or_default();
    let found = value["found"].as_bool().unwrap_or_default();

    if found {
        println!("'{word}' is in the dictionary");
    } else {
        println!("'{word}' is not in the dictionary");
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &OrthosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
